//! Signature, parameter and return-value extraction from a member record.

use crate::error::{Error, Result};
use crate::model::MemberRecord;
use crate::translate::Translator;

/// One declared parameter, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    /// Rendered description; `None` until a matching `<parameteritem>` is found
    pub desc: Option<String>,
}

/// Rendered free-text parts of one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub details: String,
    pub params: String,
    pub ret: String,
}

/// `static inline <type> <name>`, with each modifier present only when set.
pub fn prototype(member: &MemberRecord<'_>, translator: &Translator<'_>) -> String {
    let mut out = format!(
        "{} {}",
        translator.escape(&member.return_type),
        translator.escape(&member.name)
    );
    if member.is_inline {
        out.insert_str(0, "inline ");
    }
    if member.is_static {
        out.insert_str(0, "static ");
    }
    out
}

/// Details, parameter block and return documentation of `member`, with
/// missing content replaced by the style's placeholder.
pub fn extract(member: &MemberRecord<'_>, translator: &Translator<'_>) -> Result<Extracted> {
    let style = translator.style();
    let params = parameters(member, translator)?;
    Ok(Extracted {
        details: style.todo_if_empty(details(member, translator)?.trim()),
        params: param_block(&params, translator),
        ret: style.todo_if_empty(return_doc(member, translator)?.trim()),
    })
}

/// Declared parameters with their documented descriptions attached.
///
/// Types after the first (the return type) pair positionally with the
/// declared names; a `void` type drops its pair.
pub fn parameters(member: &MemberRecord<'_>, translator: &Translator<'_>) -> Result<Vec<Param>> {
    let mut types = member.types().skip(1);
    let mut params = Vec::new();
    for declname in member.declnames() {
        let ty = types
            .next()
            .ok_or_else(|| Error::MissingElement {
                parent: member.element.name.clone(),
                child: "type".to_string(),
            })?
            .text();
        if ty == "void" {
            continue;
        }
        params.push(Param {
            name: declname.text(),
            ty,
            desc: None,
        });
    }

    for item in member.element.find_all("parameteritem") {
        let name = item.require("parametername")?.text();
        let para = item.require("parameterdescription")?.require("para")?;
        let desc = translator.render_element(para)?;

        let mut declared = false;
        for param in params.iter_mut().filter(|p| p.name == name) {
            param.desc = Some(desc.clone());
            declared = true;
        }
        if !declared {
            return Err(Error::UndeclaredParameter {
                member: member.name.clone(),
                parameter: name,
            });
        }
    }

    Ok(params)
}

fn param_block(params: &[Param], translator: &Translator<'_>) -> String {
    let style = translator.style();
    if params.is_empty() {
        return style.no_params.to_string();
    }
    params
        .iter()
        .map(|p| {
            let desc = style.todo_if_empty(p.desc.as_deref().unwrap_or("").trim());
            (style.param)(&translator.escape(&p.ty), &translator.escape(&p.name), &desc)
        })
        .collect()
}

/// Top-level detailed paragraphs, skipping those that carry a parameter list.
fn details(member: &MemberRecord<'_>, translator: &Translator<'_>) -> Result<String> {
    let mut out = String::new();
    for para in member.detailed()?.children_named("para") {
        if para.find("parameterlist").is_some() {
            continue;
        }
        out.push_str(&translator.render_element(para)?);
        out.push_str("\n\n");
    }
    Ok(out)
}

/// The first `return` section wins; otherwise `void` functions get the
/// style's "no return value" marker.
fn return_doc(member: &MemberRecord<'_>, translator: &Translator<'_>) -> Result<String> {
    for sect in member.element.find_all("simplesect") {
        if sect.require_attr("kind")? == "return" {
            return translator.render_element(sect.require("para")?);
        }
    }
    let returns_void = member.return_type.split_whitespace().last() == Some("void");
    Ok(if returns_void {
        translator.style().no_return.to_string()
    } else {
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::Escaper;
    use crate::model::Element;
    use crate::refs::RefTable;
    use crate::style::latex::LATEX;
    use proptest::prelude::*;

    fn with_translator<T>(f: impl FnOnce(&Translator<'_>) -> T) -> T {
        let escaper = Escaper::new(LATEX.escapes).unwrap();
        let refs = RefTable::empty();
        f(&Translator::new(&LATEX, &escaper, &refs))
    }

    fn text_el(name: &str, text: &str) -> Element {
        Element::new(name).with_child(text)
    }

    fn para(text: &str) -> Element {
        text_el("para", text)
    }

    fn param_decl(ty: &str, name: Option<&str>) -> Element {
        let mut el = Element::new("param").with_child(text_el("type", ty));
        if let Some(name) = name {
            el = el.with_child(text_el("declname", name));
        }
        el
    }

    fn param_item(name: &str, desc: &str) -> Element {
        Element::new("parameteritem")
            .with_child(
                Element::new("parameternamelist").with_child(text_el("parametername", name)),
            )
            .with_child(Element::new("parameterdescription").with_child(para(desc)))
    }

    fn simplesect(kind: &str, text: &str) -> Element {
        Element::new("simplesect")
            .with_attr("kind", kind)
            .with_child(para(text))
    }

    /// A memberdef with the given return type, declarations and detailed
    /// description paragraphs.
    fn memberdef(ret: &str, decls: Vec<Element>, detailed: Vec<Element>) -> Element {
        let mut el = Element::new("memberdef")
            .with_attr("id", "m1")
            .with_attr("inline", "no")
            .with_attr("static", "no")
            .with_child(text_el("type", ret))
            .with_child(text_el("name", "seL4_Func"));
        for decl in decls {
            el = el.with_child(decl);
        }
        let mut desc = Element::new("detaileddescription");
        for child in detailed {
            desc = desc.with_child(child);
        }
        el.with_child(Element::new("briefdescription"))
            .with_child(desc)
            .with_child(
                Element::new("manual")
                    .with_attr("name", "Func")
                    .with_attr("label", "func"),
            )
    }

    fn extract_from(el: &Element) -> Result<Extracted> {
        let record = MemberRecord::from_element(el).unwrap();
        with_translator(|t| extract(&record, t))
    }

    #[test]
    fn prototype_modifiers_in_fixed_order() {
        let el = memberdef("seL4_Error", vec![], vec![]);
        let mut record = MemberRecord::from_element(&el).unwrap();
        assert_eq!(with_translator(|t| prototype(&record, t)), "seL4\\_Error seL4\\_Func");
        record.is_inline = true;
        assert_eq!(
            with_translator(|t| prototype(&record, t)),
            "inline seL4\\_Error seL4\\_Func"
        );
        record.is_static = true;
        assert_eq!(
            with_translator(|t| prototype(&record, t)),
            "static inline seL4\\_Error seL4\\_Func"
        );
    }

    #[test]
    fn parameters_follow_declaration_order() {
        let el = memberdef(
            "int",
            vec![
                param_decl("seL4_TCB", Some("_service")),
                param_decl("seL4_Word", Some("badge")),
            ],
            vec![Element::new("para").with_child(
                Element::new("parameterlist")
                    .with_child(param_item("badge", "The new badge"))
                    .with_child(param_item("_service", "Capability to the TCB")),
            )],
        );
        let record = MemberRecord::from_element(&el).unwrap();
        let params = with_translator(|t| parameters(&record, t)).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "_service");
        assert_eq!(params[0].desc.as_deref(), Some("Capability to the TCB"));
        assert_eq!(params[1].ty, "seL4_Word");

        let extracted = extract_from(&el).unwrap();
        assert_eq!(
            extracted.params,
            "\\param{seL4\\_TCB}{\\_service}{Capability to the TCB}\n\\param{seL4\\_Word}{badge}{The new badge}\n"
        );
    }

    #[test]
    fn undocumented_parameter_gets_placeholder() {
        let el = memberdef("int", vec![param_decl("int", Some("x"))], vec![]);
        assert_eq!(extract_from(&el).unwrap().params, "\\param{int}{x}{\\todo}\n");
    }

    #[test]
    fn void_parameter_means_no_parameters() {
        let el = memberdef("int", vec![param_decl("void", None)], vec![]);
        assert_eq!(extract_from(&el).unwrap().params, "\\param{void}{}{}");
    }

    #[test]
    fn undeclared_documented_parameter_is_an_error() {
        let el = memberdef(
            "int",
            vec![param_decl("int", Some("x"))],
            vec![Element::new("para")
                .with_child(Element::new("parameterlist").with_child(param_item("y", "nope")))],
        );
        assert!(matches!(
            extract_from(&el),
            Err(Error::UndeclaredParameter { parameter, .. }) if parameter == "y"
        ));
    }

    #[test]
    fn declname_without_type_is_an_error() {
        let el = memberdef("int", vec![text_el("declname", "orphan")], vec![]);
        assert!(matches!(
            extract_from(&el),
            Err(Error::MissingElement { child, .. }) if child == "type"
        ));
    }

    #[test]
    fn details_skip_parameter_paragraphs() {
        let el = memberdef(
            "int",
            vec![param_decl("int", Some("x"))],
            vec![
                para("First."),
                Element::new("para")
                    .with_child("Params:")
                    .with_child(Element::new("parameterlist").with_child(param_item("x", "An x"))),
                para("Second."),
            ],
        );
        assert_eq!(extract_from(&el).unwrap().details, "First.\n\nSecond.");
    }

    #[test]
    fn missing_details_become_placeholder() {
        let el = memberdef("int", vec![], vec![]);
        assert_eq!(extract_from(&el).unwrap().details, "\\todo");
    }

    #[test]
    fn void_return_defaults_to_noret() {
        let el = memberdef("static void", vec![], vec![]);
        assert_eq!(extract_from(&el).unwrap().ret, "\\noret");
        let el = memberdef("seL4_Error", vec![], vec![]);
        assert_eq!(extract_from(&el).unwrap().ret, "\\todo");
    }

    #[test]
    fn first_return_section_wins() {
        let el = memberdef(
            "void",
            vec![],
            vec![Element::new("para")
                .with_child(simplesect("note", "A note."))
                .with_child(simplesect("return", "First return."))
                .with_child(simplesect("return", "Second return."))],
        );
        let extracted = extract_from(&el).unwrap();
        assert_eq!(extracted.ret, "First return.");
        // the simplesects are not part of the rendered vocabulary
        assert_eq!(extracted.details, "\\todo");
    }

    #[test]
    fn return_section_text_is_trimmed() {
        let el = memberdef(
            "int",
            vec![],
            vec![Element::new("para").with_child(simplesect("return", "  0 on success \n"))],
        );
        assert_eq!(extract_from(&el).unwrap().ret, "0 on success");
    }

    proptest! {
        #[test]
        fn prop_parameter_count_excludes_void(decls in prop::collection::vec(any::<bool>(), 0..8)) {
            let decl_elements: Vec<Element> = decls
                .iter()
                .enumerate()
                .map(|(i, is_void)| {
                    let ty = if *is_void { "void" } else { "int" };
                    param_decl(ty, Some(&format!("p{i}")))
                })
                .collect();
            let el = memberdef("int", decl_elements, vec![]);
            let record = MemberRecord::from_element(&el).unwrap();
            let params = with_translator(|t| parameters(&record, t)).unwrap();

            let expected: Vec<String> = decls
                .iter()
                .enumerate()
                .filter(|(_, is_void)| !**is_void)
                .map(|(i, _)| format!("p{i}"))
                .collect();
            let names: Vec<String> = params.into_iter().map(|p| p.name).collect();
            prop_assert_eq!(names, expected);
        }
    }
}
