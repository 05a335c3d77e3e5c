//! Plain-text vocabulary, for reading the documentation in a terminal or
//! diffing it without a TeX toolchain.

use super::{ApiDoc, Style};
use crate::model::{Level, ListKind};
use crate::refs::RefTarget;

pub const PLAIN: Style = Style {
    name: "plain",
    escapes: &[],
    code_span,
    cross_ref,
    section_ref,
    object_ref,
    auto_ref,
    error_placeholder: "",
    list,
    list_item,
    param,
    no_params: "  (none)\n",
    no_return: "Nothing.",
    todo: "TODO",
    no_methods: "No methods.",
    api_doc,
};

fn code_span(text: &str) -> String {
    format!("`{}`", text)
}

fn cross_ref(target: &RefTarget) -> String {
    format!("{} ({})", target.name, target.label)
}

fn section_ref(sec: &str) -> String {
    format!("section {}", sec)
}

fn object_ref(name: &str) -> String {
    name.to_string()
}

fn auto_ref(label: &str) -> String {
    label.to_string()
}

const ITEM_MARKER: &str = "  - ";

/// Itemized entries keep their dash; ordered entries are numbered from 1.
fn list(kind: ListKind, body: &str) -> String {
    match kind {
        ListKind::Itemized => format!("\n{}", body),
        ListKind::Ordered => {
            let mut out = String::from("\n");
            let mut number = 0;
            for line in body.split_inclusive('\n') {
                match line.strip_prefix(ITEM_MARKER) {
                    Some(rest) => {
                        number += 1;
                        out.push_str(&format!("  {}. {}", number, rest));
                    }
                    None => out.push_str(line),
                }
            }
            out
        }
    }
}

fn list_item(content: &str) -> String {
    format!("{}{}\n", ITEM_MARKER, content)
}

fn param(ty: &str, name: &str, desc: &str) -> String {
    format!("  {} ({}): {}\n", name, ty, desc)
}

fn api_doc(doc: &ApiDoc<'_>) -> String {
    let heading = format!("{} [{}]", doc.name, doc.label);
    let rule = match doc.level {
        Level::Subsection => "-",
        Level::Subsubsection => "~",
    }
    .repeat(heading.chars().count());
    format!(
        "\n{heading}\n{rule}\n\n{brief}\n\n    {prototype}\n\nParameters:\n{params}\nReturns: {ret}\n\n{details}\n",
        brief = doc.brief,
        prototype = doc.prototype,
        params = doc.params,
        ret = doc.ret,
        details = doc.details,
    )
}
