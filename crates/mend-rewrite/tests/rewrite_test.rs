//! End-to-end tests of the rewrite chain: sanitize -> injectors -> guard.

use mend_rewrite::{apply_injectors, has_content_loss, restore_table_block, sanitize_markup};

const LLM_OUTPUT: &str = r#"Here's the updated JSX file:
```jsx
import React from 'react';

export default function Orders() {
  return (
    <div>
      <Typography variant="h4">Your Orders</Typography>
      <Button color="primary">Reorder</Button>
      <Table>
        <TableBody></TableBody>
      </Table>
    </div>
  );
}
```"#;

const BACKUP: &str = r#"import React from 'react';

export default function Orders() {
  return (
    <div>
      <Typography variant="h4">Your Orders</Typography>
      <Button color="primary">Reorder</Button>
      <Table>
        <TableBody>
          <TableRow><TableCell>Pizza</TableCell></TableRow>
          <TableRow><TableCell>Burger</TableCell></TableRow>
        </TableBody>
      </Table>
    </div>
  );
}"#;

#[test]
fn full_chain_cleans_labels_and_restores_rows() {
    let cleaned = sanitize_markup(LLM_OUTPUT);
    assert!(!cleaned.contains("```"));
    assert!(!cleaned.contains("Here's"));

    let injected = apply_injectors(&cleaned);
    assert!(injected.contains(r#"aria-label="Reorder""#));
    assert!(injected.contains(r#"aria-label="Your Orders""#));
    assert!(injected.contains(r#"tabIndex="0""#));

    assert!(has_content_loss(&injected));
    let restored = restore_table_block(&injected, BACKUP);
    assert!(restored.contains("Pizza"));
    assert!(restored.contains("Burger"));
}

#[test]
fn guard_triggers_on_emptied_table_body_literal() {
    let merged = "<Table><TableBody></TableBody></Table>";
    assert!(has_content_loss(merged));
    let restored = restore_table_block(merged, BACKUP);
    assert!(restored.contains("<TableRow><TableCell>Pizza</TableCell></TableRow>"));
    assert!(!restored.contains("<TableBody></TableBody>"));
}

#[test]
fn labeled_button_survives_the_chain_unchanged() {
    let input = r#"<Button aria-label="Buy now">Buy</Button>"#;
    let out = apply_injectors(&sanitize_markup(input));
    assert!(out.contains(r#"aria-label="Buy now""#));
    // The label must not be duplicated or rewritten.
    assert_eq!(out.matches("aria-label=").count(), 1);
}

#[test]
fn injectors_applied_twice_change_nothing() {
    let cleaned = sanitize_markup(LLM_OUTPUT);
    let once = apply_injectors(&cleaned);
    let twice = apply_injectors(&once);
    assert_eq!(once, twice);
}

#[test]
fn sanitizer_applied_twice_changes_nothing() {
    let once = sanitize_markup(LLM_OUTPUT);
    let twice = sanitize_markup(&once);
    assert_eq!(once, twice);
}
