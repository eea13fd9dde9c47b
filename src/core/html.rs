// src/core/html.rs
// Thin helpers over `scraper` with cheerio-like text semantics.
use scraper::{ElementRef, Selector};

/// Compile a CSS selector, keeping the offending text in the error.
pub fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("bad selector `{css}`: {e}"))
}

/// Concatenated text of *all* matches under `root`, trimmed.
pub fn text_all(root: ElementRef<'_>, sel: &Selector) -> String {
    let mut out = s!();
    for el in root.select(sel) {
        out.extend(el.text());
    }
    s!(out.trim())
}

/// Text of the first match under `root`, trimmed. Empty if nothing matches.
pub fn first_text(root: ElementRef<'_>, sel: &Selector) -> String {
    root.select(sel)
        .next()
        .map(text_of)
        .unwrap_or_default()
}

pub fn text_of(el: ElementRef<'_>) -> String {
    s!(el.text().collect::<String>().trim())
}

/// cheerio `:selected`: marked `selected`, or the first option of a single-choice
/// `select` in which no option is marked.
pub fn is_selected(option: ElementRef<'_>) -> bool {
    if option.value().attr("selected").is_some() {
        return true;
    }
    let Some(parent) = option.parent().and_then(ElementRef::wrap) else { return false };
    if parent.value().name() != "select" || parent.value().attr("multiple").is_some() {
        return false;
    }
    let mut siblings = parent.children().filter_map(ElementRef::wrap);
    match siblings.next() {
        Some(first) if first.id() == option.id() => {}
        _ => return false,
    }
    !siblings.any(|s| s.value().attr("selected").is_some())
}

/// Attribute of the first match under `root`.
pub fn first_attr(root: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    root.select(sel).next()?.value().attr(attr).map(|v| s!(v))
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn header_text_ignores_br() {
        let doc = Html::parse_fragment(r#"<div class="bold hide0">lun<br>01/07/24</div>"#);
        let sel = selector(".bold.hide0").unwrap();
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(text_of(el), "lun01/07/24");
    }

    #[test]
    fn unmarked_single_select_selects_first_option() {
        let doc = Html::parse_fragment(
            r#"<div><select><option>a</option><option>b</option></select>
               <select><option>c</option><option selected>d</option></select></div>"#,
        );
        let sel = selector("option").unwrap();
        let picked: Vec<String> = doc.select(&sel).filter(|o| is_selected(*o)).map(text_of).collect();
        assert_eq!(picked, ["a", "d"]);
    }

    #[test]
    fn text_all_concatenates_matches() {
        let doc = Html::parse_fragment(r#"<p><span class="x"> a</span><span class="x">b </span></p>"#);
        let root = doc.root_element();
        let sel = selector("span.x").unwrap();
        assert_eq!(text_all(root, &sel), "ab");
        assert_eq!(first_text(root, &sel), "a");
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(selector("td[").is_err());
    }
}
