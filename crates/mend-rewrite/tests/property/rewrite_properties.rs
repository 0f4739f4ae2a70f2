use mend_rewrite::inject::{add_tab_order, label_buttons, label_icons, label_typography};
use mend_rewrite::sanitize_markup;
use proptest::prelude::*;

// ── Sanitizer idempotence over markup-shaped input ────────────────────────

proptest! {
    #[test]
    fn sanitize_idempotent_on_element_text(
        tag in "[A-Za-z]{1,10}".prop_filter(
            "document wrapper tags are stripped, not preserved",
            |t| !matches!(t.to_lowercase().as_str(), "html" | "head" | "body")
        ),
        inner in "[A-Za-z0-9 .,:]{0,40}"
    ) {
        let input = format!("<{tag}>{inner}</{tag}>");
        let once = sanitize_markup(&input);
        let twice = sanitize_markup(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sanitize_idempotent_on_fenced_completion(
        inner in "[A-Za-z0-9 =\"\\n]{0,120}"
    ) {
        let input = format!("```jsx\n{inner}\n```");
        let once = sanitize_markup(&input);
        let twice = sanitize_markup(&once);
        prop_assert_eq!(once, twice);
    }
}

// ── Injector idempotence ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn button_labeling_idempotent(inner in "[A-Za-z0-9 ]{0,40}") {
        let input = format!("<Button>{inner}</Button>");
        let once = label_buttons(&input);
        prop_assert_eq!(label_buttons(&once), once);
    }

    #[test]
    fn tab_order_idempotent(
        inner in "[A-Za-z0-9 ]{0,40}",
        attr in "[a-z]{0,8}"
    ) {
        let attrs = if attr.is_empty() {
            String::new()
        } else {
            format!(" className=\"{attr}\"")
        };
        let input = format!("<span{attrs}>{inner}</span><TableCell/>");
        let once = add_tab_order(&input);
        prop_assert_eq!(add_tab_order(&once), once);
    }

    #[test]
    fn icon_labeling_idempotent(attr in "[a-z]{0,8}") {
        let attrs = if attr.is_empty() {
            String::new()
        } else {
            format!(" color=\"{attr}\"")
        };
        let input = format!("<Edit{attrs}/><Trash/>");
        let once = label_icons(&input);
        prop_assert_eq!(label_icons(&once), once);
    }

    #[test]
    fn typography_labeling_idempotent(inner in "[A-Za-z0-9 ]{0,60}") {
        let input = format!("<Typography>{inner}</Typography>");
        let once = label_typography(&input);
        prop_assert_eq!(label_typography(&once), once);
    }
}

// ── Non-destructive labeling ──────────────────────────────────────────────

proptest! {
    #[test]
    fn existing_button_label_never_rewritten(
        label in "[A-Za-z ]{1,20}",
        inner in "[A-Za-z0-9 ]{1,40}"
    ) {
        let input = format!("<Button aria-label=\"{label}\">{inner}</Button>");
        prop_assert_eq!(label_buttons(&input), input);
    }
}
