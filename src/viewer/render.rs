use http::{Method, StatusCode};

use super::{AttrDoc, HelpInfo, NO_DOC_PLACEHOLDER};

pub(crate) struct Page {
    pub status: StatusCode,
    pub body: String,
}

pub(crate) fn route(method: &Method, path: &str, help: &HelpInfo) -> Page {
    if method != Method::GET {
        return Page {
            status: StatusCode::METHOD_NOT_ALLOWED,
            body: "Method not allowed".to_string(),
        };
    }

    if path == "/" {
        return Page {
            status: StatusCode::OK,
            body: index(help),
        };
    }

    if let Some(name) = path.strip_prefix("/help/") {
        if let Some(attr) = help.get(name) {
            return Page {
                status: StatusCode::OK,
                body: detail(name, attr),
            };
        }
    }

    Page {
        status: StatusCode::NOT_FOUND,
        body: "Help not found".to_string(),
    }
}

fn index(help: &HelpInfo) -> String {
    let mut body = String::from("<h1>object help documentation</h1>\n<ul>\n");
    for name in help.names() {
        let name = escape(name);
        body.push_str(&format!(
            "<li><a href=\"/help/{name}\">{name}</a></li>\n"
        ));
    }
    body.push_str("</ul>\n");
    body
}

fn detail(name: &str, attr: &AttrDoc) -> String {
    let doc = attr.doc.as_deref().unwrap_or(NO_DOC_PLACEHOLDER);
    format!(
        "<h1>Help for {name}</h1>\n\
         <p><strong>Type:</strong> {type_label}</p>\n\
         <p><strong>Documentation:</strong></p>\n\
         <pre>{doc}</pre>\n\
         <a href=\"/\">Back to Index</a>\n",
        name = escape(name),
        type_label = escape(&attr.type_label),
        doc = escape(doc),
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
