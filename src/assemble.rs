//! Document assembly — one compound in, one output fragment out.

use crate::error::Result;
use crate::escape::Escaper;
use crate::extract;
use crate::model::{Element, Level, MemberRecord};
use crate::refs::RefTable;
use crate::style::{ApiDoc, Style};
use crate::translate::Translator;

/// Translate a parsed Doxygen document into a fragment in `style`.
///
/// The compound's own description comes first, then one block per member in
/// document order. A document without members yields only the style's
/// "no methods" sentinel.
pub fn assemble(root: &Element, level: Level, style: &Style) -> Result<String> {
    let escaper = Escaper::new(style.escapes)?;
    let members = MemberRecord::collect(root)?;
    let refs = RefTable::build(&members, &escaper)?;
    tracing::debug!(members = members.len(), keys = refs.len(), "built reference table");
    let translator = Translator::new(style, &escaper, &refs);

    // Briefs and the compound description are rendered without references.
    let no_refs = RefTable::empty();
    let unlinked = translator.with_refs(&no_refs);

    let mut output = String::new();
    let compound = root.require("compounddef")?;
    for desc in compound.children_named("detaileddescription") {
        if let Some(para) = desc.find("para") {
            output.push_str(&unlinked.render_element(para)?);
        }
    }

    if members.is_empty() {
        tracing::debug!("document has no members");
        return Ok(style.no_methods.to_string());
    }

    for member in &members {
        output.push_str(&render_member(member, level, &translator, &unlinked)?);
    }
    Ok(output)
}

fn render_member(
    member: &MemberRecord<'_>,
    level: Level,
    translator: &Translator<'_>,
    unlinked: &Translator<'_>,
) -> Result<String> {
    let style = translator.style();
    let extracted = extract::extract(member, translator)?;
    let label = member.label()?;
    let name = translator.escape(member.display_name()?);
    let brief = style.todo_if_empty(&brief_text(member, unlinked)?);
    let prototype = extract::prototype(member, translator);

    tracing::debug!(member = %member.name, label = %label, "rendering member");
    Ok((style.api_doc)(&ApiDoc {
        level,
        label,
        name: &name,
        brief: &brief,
        prototype: &prototype,
        params: &extracted.params,
        ret: &extracted.ret,
        details: &extracted.details,
    }))
}

/// Every paragraph of the brief description, separated by a blank line.
fn brief_text(member: &MemberRecord<'_>, translator: &Translator<'_>) -> Result<String> {
    let paras = member
        .brief()?
        .find_all("para")
        .map(|para| translator.render_element(para))
        .collect::<Result<Vec<_>>>()?;
    Ok(paras.join("\n\n"))
}
