//! Document shell template for assembled pages.

use minijinja::{context, Environment};

/// Context for rendering one document.
///
/// Asset and meta fields hold pre-rendered HTML fragments in output order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentContext {
    /// Doctype rendered on the first line
    pub doctype: String,
    /// Document title
    pub title: String,
    /// Rendered charset meta element
    pub encoding: String,
    /// Rendered meta fragments
    pub meta: Vec<String>,
    /// Rendered vendor fragments (head)
    pub vendors: Vec<String>,
    /// Rendered stylesheet fragments (head)
    pub stylesheets: Vec<String>,
    /// Rendered script fragments (end of body)
    pub scripts: Vec<String>,
    /// Serialized `<body>` attributes, with leading space when non-empty
    pub body_attrs: String,
    /// Inner body HTML
    pub body: String,
}

/// Template engine wrapping the embedded document shell.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the default document shell.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("document.html".to_string(), DOCUMENT_TEMPLATE.to_string())
            .expect("Failed to add document template");

        Self { env }
    }

    /// Render a complete document.
    pub fn render_document(&self, ctx: &DocumentContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("document.html")?;

        tmpl.render(context! {
            doctype => &ctx.doctype,
            title => &ctx.title,
            encoding => &ctx.encoding,
            meta => &ctx.meta,
            vendors => &ctx.vendors,
            stylesheets => &ctx.stylesheets,
            scripts => &ctx.scripts,
            body_attrs => &ctx.body_attrs,
            body => &ctx.body,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const DOCUMENT_TEMPLATE: &str = r#"<!doctype {{ doctype }}>
<html>
  <head>
    <title>{{ title }}</title>
    {{ encoding | safe }}
{%- for fragment in meta %}
    {{ fragment | safe }}
{%- endfor %}
{%- for fragment in vendors %}
    {{ fragment | safe }}
{%- endfor %}
{%- for fragment in stylesheets %}
    {{ fragment | safe }}
{%- endfor %}
  </head>
  <body{{ body_attrs | safe }}>
{%- if body %}
    {{ body | safe }}
{%- endif %}
{%- for fragment in scripts %}
    {{ fragment | safe }}
{%- endfor %}
  </body>
</html>
"#;
