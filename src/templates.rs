//! Page template loading and rendering using Tera.
//!
//! The task page ships embedded in the binary. A templates directory on disk
//! can override it: any `*.html` file there replaces the embedded template of
//! the same name.

use crate::error::{Error, Result};
use crate::tasks::Task;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tera::{Context, Tera};

/// Default templates directory relative to the working directory.
const TEMPLATES_DIR: &str = "templates";

/// Name of the task list page template.
pub const INDEX_TEMPLATE: &str = "index.html";

/// Embedded default templates for fallback when files don't exist.
static EMBEDDED_TEMPLATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(INDEX_TEMPLATE, include_str!("../templates/index.html"));
    m
});

/// Loaded page templates.
#[derive(Debug)]
pub struct Templates {
    tera: RwLock<Tera>,
    dir: PathBuf,
    auto_reload: bool,
}

impl Templates {
    /// Load templates from `templates_dir` (or `./templates` when `None`),
    /// filling anything missing from the embedded defaults.
    ///
    /// A directory that doesn't exist is not an error: the embedded templates
    /// are used as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but contains invalid templates.
    pub fn load(templates_dir: Option<&Path>) -> Result<Self> {
        let dir = templates_dir.map_or_else(
            || std::env::current_dir().unwrap_or_default().join(TEMPLATES_DIR),
            Path::to_path_buf,
        );
        let tera = build_tera(&dir)?;
        Ok(Self { tera: RwLock::new(tera), dir, auto_reload: false })
    }

    /// Re-read the templates directory before every render.
    #[must_use]
    pub fn with_auto_reload(mut self, auto_reload: bool) -> Self {
        self.auto_reload = auto_reload;
        self
    }

    /// Directory consulted for template overrides.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the template doesn't exist, rendering fails, or
    /// (with auto-reload) the templates on disk no longer parse.
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        if self.auto_reload {
            let fresh = build_tera(&self.dir)?;
            *self.tera.write().map_err(|e| Error::Template(e.to_string()))? = fresh;
        }

        let tera = self.tera.read().map_err(|e| Error::Template(e.to_string()))?;
        tera.render(name, context)
            .map_err(|e| Error::Template(format!("Failed to render template {name}: {e}")))
    }

    /// Render the task list page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page template fails to render.
    pub fn render_index(&self, tasks: &[Task]) -> Result<String> {
        let mut context = Context::new();
        context.insert("tasks", tasks);
        self.render(INDEX_TEMPLATE, &context)
    }
}

/// Get the list of all embedded template names.
#[must_use]
pub fn embedded_template_names() -> Vec<&'static str> {
    EMBEDDED_TEMPLATES.keys().copied().collect()
}

fn build_tera(dir: &Path) -> Result<Tera> {
    let mut tera = Tera::default();

    if dir.exists() {
        let glob_pattern = format!("{}/**/*.html", dir.display());
        tera = Tera::new(&glob_pattern).map_err(|e| {
            Error::Template(format!("Failed to load templates from {}: {e}", dir.display()))
        })?;
        tracing::debug!(dir = %dir.display(), "loaded templates from disk");
    }

    for (name, content) in EMBEDDED_TEMPLATES.iter() {
        if tera.get_template(name).is_err() {
            tera.add_raw_template(name, content).map_err(|e| {
                Error::Template(format!("Invalid embedded template {name}: {e}"))
            })?;
        }
    }

    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn embedded() -> Templates {
        Templates::load(Some(Path::new("/nonexistent"))).unwrap()
    }

    #[test]
    fn test_embedded_index_renders_empty_state() {
        let html = embedded().render_index(&[]).unwrap();
        assert!(html.contains("<title>Task Manager</title>"));
        assert!(html.contains(r#"class="empty-state""#));
        assert!(!html.contains(r#"class="task-item""#));
    }

    #[test]
    fn test_index_exposes_page_elements() {
        let html = embedded().render_index(&[]).unwrap();
        assert!(html.contains(r#"id="title""#));
        assert!(html.contains(r#"id="taskInput""#));
        assert!(html.contains(r#"placeholder="Enter a new task...""#));
        assert!(html.contains(r#"id="addBtn">Add Task</button>"#));
        assert!(html.contains(r#"id="clearBtn">Clear All Tasks</button>"#));
        assert!(html.contains(r#"id="taskList""#));
        assert!(html.contains(r#"id="message""#));
        assert!(html.contains("confirm("));
    }

    #[test]
    fn test_index_lists_tasks_in_order() {
        let tasks = vec![Task::new(1, "Learn Rust"), Task::new(2, "Write documentation")];
        let html = embedded().render_index(&tasks).unwrap();

        assert_eq!(html.matches(r#"class="task-item""#).count(), 2);
        assert!(!html.contains(r#"class="empty-state""#));
        let first = html.find(r#"<li class="task-item">Learn Rust</li>"#).unwrap();
        let second = html.find(r#"<li class="task-item">Write documentation</li>"#).unwrap();
        assert!(first < second);
        assert!(!html.contains("data-id"));
    }

    #[test]
    fn test_descriptions_are_escaped() {
        let tasks = vec![Task::new(1, "<script>alert(1)</script>")];
        let html = embedded().render_index(&tasks).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_filesystem_templates_override_embedded() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INDEX_TEMPLATE), "CUSTOM: {{ tasks | length }}").unwrap();

        let templates = Templates::load(Some(dir.path())).unwrap();
        let html = templates.render_index(&[Task::new(1, "One")]).unwrap();
        assert_eq!(html, "CUSTOM: 1");
    }

    #[test]
    fn test_empty_dir_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        let templates = Templates::load(Some(dir.path())).unwrap();
        assert_eq!(templates.dir(), dir.path());
        assert!(templates.render_index(&[]).unwrap().contains("Task Manager"));
    }

    #[test]
    fn test_render_missing_template_fails() {
        let result = embedded().render("nonexistent.html", &Context::new());
        assert!(matches!(result, Err(Error::Template(_))));
    }

    #[test]
    fn test_init_with_invalid_templates_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("invalid.html"), "{% if foo %}unclosed if tag without endif")
            .unwrap();

        let err = Templates::load(Some(dir.path())).unwrap_err().to_string();
        assert!(err.contains("Failed to load templates"), "Error was: {err}");
    }

    #[test]
    fn test_auto_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(INDEX_TEMPLATE);
        fs::write(&path, "v1").unwrap();

        let templates = Templates::load(Some(dir.path())).unwrap().with_auto_reload(true);
        assert_eq!(templates.render_index(&[]).unwrap(), "v1");

        fs::write(&path, "v2").unwrap();
        assert_eq!(templates.render_index(&[]).unwrap(), "v2");
    }

    #[test]
    fn test_without_auto_reload_keeps_loaded_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(INDEX_TEMPLATE);
        fs::write(&path, "v1").unwrap();

        let templates = Templates::load(Some(dir.path())).unwrap();
        fs::write(&path, "v2").unwrap();
        assert_eq!(templates.render_index(&[]).unwrap(), "v1");
    }

    #[test]
    fn test_all_embedded_templates_render() {
        let templates = embedded();
        let mut ctx = Context::new();
        ctx.insert("tasks", &vec![Task::new(1, "Sample")]);
        for name in embedded_template_names() {
            templates.render(name, &ctx).unwrap();
        }
    }
}
