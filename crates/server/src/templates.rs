use mustache::Template;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Scale,
    Duets,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::Scale => "scale.html",
            Page::Duets => "duets.html",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Page::Home => include_str!("../templates/home.html.mustache"),
            Page::Scale => include_str!("../templates/scale.html.mustache"),
            Page::Duets => include_str!("../templates/duets.html.mustache"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to compile template {page}: {source}")]
    Compile {
        page: &'static str,
        #[source]
        source: mustache::Error,
    },
    #[error("failed to render template {page}: {source}")]
    Render {
        page: &'static str,
        #[source]
        source: mustache::Error,
    },
}

/// Page templates, compiled once at startup.
pub struct Templates {
    home: Template,
    scale: Template,
    duets: Template,
}

impl Templates {
    pub fn compile() -> Result<Self, TemplateError> {
        Ok(Self {
            home: compile(Page::Home)?,
            scale: compile(Page::Scale)?,
            duets: compile(Page::Duets)?,
        })
    }

    pub fn render<T: Serialize>(&self, page: Page, vars: &T) -> Result<String, TemplateError> {
        let template = match page {
            Page::Home => &self.home,
            Page::Scale => &self.scale,
            Page::Duets => &self.duets,
        };
        template
            .render_to_string(vars)
            .map_err(|source| TemplateError::Render {
                page: page.name(),
                source,
            })
    }
}

fn compile(page: Page) -> Result<Template, TemplateError> {
    mustache::compile_str(page.source()).map_err(|source| TemplateError::Compile {
        page: page.name(),
        source,
    })
}
