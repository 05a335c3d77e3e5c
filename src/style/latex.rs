//! LaTeX vocabulary of the API reference manual.
//!
//! Macros such as `\apidoc`, `\apifunc`, `\param` and `\noret` are defined by
//! the manual's preamble; this module only emits them.

use super::{ApiDoc, Style};
use crate::model::ListKind;
use crate::refs::RefTarget;

pub const LATEX: Style = Style {
    name: "latex",
    escapes: &[("_", "\\_")],
    code_span,
    cross_ref,
    section_ref,
    object_ref,
    auto_ref,
    error_placeholder: "\\errorenumdesc",
    list,
    list_item,
    param,
    no_params: "\\param{void}{}{}",
    no_return: "\\noret",
    todo: "\\todo",
    no_methods: "No methods.",
    api_doc,
};

fn code_span(text: &str) -> String {
    format!("\\texttt{{{}}}", text)
}

fn cross_ref(target: &RefTarget) -> String {
    format!("\\apifunc{{{}}}{{{}}}", target.name, target.label)
}

fn section_ref(sec: &str) -> String {
    format!("\\ref{{sec:{}}}", sec)
}

fn object_ref(name: &str) -> String {
    format!("\\obj{{{}}}", name)
}

fn auto_ref(label: &str) -> String {
    format!("\\autoref{{{}}}", label)
}

fn list(kind: ListKind, body: &str) -> String {
    let env = match kind {
        ListKind::Ordered => "enumerate",
        ListKind::Itemized => "itemize",
    };
    format!("\\begin{{{env}}}\n{body}\\end{{{env}}}\n")
}

fn list_item(content: &str) -> String {
    format!("\\item {}\n", content)
}

fn param(ty: &str, name: &str, desc: &str) -> String {
    format!("\\param{{{}}}{{{}}}{{{}}}\n", ty, name, desc)
}

fn api_doc(doc: &ApiDoc<'_>) -> String {
    format!(
        "\n\\apidoc\n[{{{level}}}]\n{{{label}}}\n{{{name}}}\n{{{brief}}}\n{{{prototype}}}\n{{{params}}}\n{{{ret}}}\n{{{details}}}\n        ",
        level = doc.level.as_str(),
        label = doc.label,
        name = doc.name,
        brief = doc.brief,
        prototype = doc.prototype,
        params = doc.params,
        ret = doc.ret,
        details = doc.details,
    )
}
