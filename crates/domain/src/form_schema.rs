// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-salon consultation form schema.
//!
//! A schema is a flat list of fields plus an adjacency-style rules map: a
//! field may declare conditional rules that reveal child fields when its
//! answer matches a trigger value. Child fields are excluded from the
//! top-level ordered list and spliced in immediately after their trigger
//! when it fires.

use crate::error::DomainError;
use crate::request::FormAnswer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

/// Input types a consultation form field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text.
    Text,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Multi-line text.
    Textarea,
    /// Single or multi select from fixed options.
    Select,
    /// File upload.
    File,
}

impl FieldType {
    /// Returns the wire string for this field type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::File => "file",
        }
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "textarea" => Ok(Self::Textarea),
            "select" => Ok(Self::Select),
            "file" => Ok(Self::File),
            _ => Err(DomainError::InvalidFieldType(s.to_string())),
        }
    }
}

/// A rule mapping a trigger answer to the child fields it reveals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    /// The answer value that fires this rule.
    pub trigger_value: String,
    /// Ids of the fields revealed when the rule fires.
    pub show_fields: Vec<String>,
}

/// One field in a salon's consultation form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Unique field identifier within the schema.
    pub id: String,
    /// The input type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Display label.
    pub label: String,
    /// Whether an answer is required.
    pub required: bool,
    /// Position in the display/pagination sequence. Values need not be
    /// contiguous but must induce a total order.
    pub order: i32,
    /// Options for `select` fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// MIME filter for `file` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    /// Rules revealing child fields when this field's answer matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditional_rules: Vec<ConditionalRule>,
}

/// Validates a full schema before it replaces a salon's stored one.
///
/// Checks that field ids are unique, `order` values induce a total order,
/// select fields carry options, and every conditional rule reveals a field
/// that exists in the schema.
///
/// # Errors
///
/// Returns the first violated rule as a `DomainError`.
pub fn validate_schema(fields: &[FormField]) -> Result<(), DomainError> {
    let mut ids: HashSet<&str> = HashSet::new();
    for field in fields {
        if !ids.insert(field.id.as_str()) {
            return Err(DomainError::DuplicateFieldId(field.id.clone()));
        }
        if field.field_type == FieldType::Select && field.options.is_empty() {
            return Err(DomainError::MissingSelectOptions(field.id.clone()));
        }
    }

    let mut orders: HashSet<i32> = HashSet::new();
    for field in fields {
        if !orders.insert(field.order) {
            return Err(DomainError::DuplicateFieldOrder {
                field_id: field.id.clone(),
                order: field.order,
            });
        }
    }

    for field in fields {
        for rule in &field.conditional_rules {
            for target in &rule.show_fields {
                if !ids.contains(target.as_str()) {
                    return Err(DomainError::UnknownRuleTarget {
                        field_id: field.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

/// Resolves the ordered list of fields visible for a set of answers.
///
/// Top-level fields (those not revealed by any rule) are emitted in `order`
/// sequence. After each field whose answer fires a rule, the revealed
/// children are spliced in immediately, in the order the rule lists them.
/// Revealed children may themselves reveal further fields; a field is never
/// emitted twice, which also makes rule cycles harmless.
#[must_use]
pub fn resolve_visible_fields<'a>(
    fields: &'a [FormField],
    answers: &BTreeMap<String, FormAnswer>,
) -> Vec<&'a FormField> {
    let by_id: BTreeMap<&str, &FormField> = fields.iter().map(|f| (f.id.as_str(), f)).collect();

    let children: HashSet<&str> = fields
        .iter()
        .flat_map(|f| &f.conditional_rules)
        .flat_map(|rule| &rule.show_fields)
        .map(String::as_str)
        .collect();

    let mut top_level: Vec<&FormField> = fields
        .iter()
        .filter(|f| !children.contains(f.id.as_str()))
        .collect();
    top_level.sort_by_key(|f| f.order);

    let mut visible: Vec<&FormField> = Vec::new();
    let mut emitted: HashSet<&str> = HashSet::new();
    for field in top_level {
        emit_with_revealed(field, &by_id, answers, &mut visible, &mut emitted);
    }
    visible
}

/// Emits a field and, when its answer fires a rule, its revealed children
/// directly after it.
fn emit_with_revealed<'a>(
    field: &'a FormField,
    by_id: &BTreeMap<&str, &'a FormField>,
    answers: &BTreeMap<String, FormAnswer>,
    visible: &mut Vec<&'a FormField>,
    emitted: &mut HashSet<&'a str>,
) {
    if !emitted.insert(field.id.as_str()) {
        return;
    }
    visible.push(field);

    let Some(answer) = answers.get(&field.id) else {
        return;
    };
    for rule in &field.conditional_rules {
        if !answer.matches_trigger(&rule.trigger_value) {
            continue;
        }
        for target in &rule.show_fields {
            if let Some(child) = by_id.get(target.as_str()) {
                emit_with_revealed(child, by_id, answers, visible, emitted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: &str, order: i32) -> FormField {
        FormField {
            id: id.to_string(),
            field_type: FieldType::Text,
            label: format!("Field {id}"),
            required: false,
            order,
            options: Vec::new(),
            accept: None,
            conditional_rules: Vec::new(),
        }
    }

    fn answer(value: &str) -> FormAnswer {
        FormAnswer::Text(value.to_string())
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let fields = vec![field("a", 1), field("a", 2)];
        assert_eq!(
            validate_schema(&fields),
            Err(DomainError::DuplicateFieldId(String::from("a")))
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_order() {
        let fields = vec![field("a", 1), field("b", 1)];
        assert!(matches!(
            validate_schema(&fields),
            Err(DomainError::DuplicateFieldOrder { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_select_without_options() {
        let mut select = field("color", 1);
        select.field_type = FieldType::Select;
        assert_eq!(
            validate_schema(&[select]),
            Err(DomainError::MissingSelectOptions(String::from("color")))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_rule_target() {
        let mut trigger = field("a", 1);
        trigger.conditional_rules.push(ConditionalRule {
            trigger_value: String::from("yes"),
            show_fields: vec![String::from("missing")],
        });
        assert!(matches!(
            validate_schema(&[trigger]),
            Err(DomainError::UnknownRuleTarget { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_noncontiguous_order() {
        let fields = vec![field("a", 10), field("b", 3), field("c", 700)];
        assert_eq!(validate_schema(&fields), Ok(()));
    }

    #[test]
    fn test_top_level_fields_sorted_by_order() {
        let fields = vec![field("b", 2), field("a", 1), field("c", 3)];
        let visible = resolve_visible_fields(&fields, &BTreeMap::new());
        let ids: Vec<&str> = visible.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_children_hidden_until_trigger_fires() {
        let mut trigger = field("has_allergies", 1);
        trigger.conditional_rules.push(ConditionalRule {
            trigger_value: String::from("yes"),
            show_fields: vec![String::from("allergy_detail")],
        });
        let fields = vec![trigger, field("allergy_detail", 2), field("next", 3)];

        let hidden = resolve_visible_fields(&fields, &BTreeMap::new());
        let ids: Vec<&str> = hidden.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["has_allergies", "next"]);

        let mut answers = BTreeMap::new();
        answers.insert(String::from("has_allergies"), answer("yes"));
        let shown = resolve_visible_fields(&fields, &answers);
        let ids: Vec<&str> = shown.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["has_allergies", "allergy_detail", "next"]);
    }

    #[test]
    fn test_list_answer_matches_trigger() {
        let mut trigger = field("services", 1);
        trigger.conditional_rules.push(ConditionalRule {
            trigger_value: String::from("color"),
            show_fields: vec![String::from("current_color")],
        });
        let fields = vec![trigger, field("current_color", 2)];

        let mut answers = BTreeMap::new();
        answers.insert(
            String::from("services"),
            FormAnswer::List(vec![String::from("cut"), String::from("color")]),
        );
        let shown = resolve_visible_fields(&fields, &answers);
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn test_shared_child_emitted_once() {
        // Two triggers reveal the same child; it must appear exactly once,
        // after the first trigger that fires.
        let shared = vec![String::from("detail")];
        let mut first = field("first", 1);
        first.conditional_rules.push(ConditionalRule {
            trigger_value: String::from("yes"),
            show_fields: shared.clone(),
        });
        let mut second = field("second", 2);
        second.conditional_rules.push(ConditionalRule {
            trigger_value: String::from("yes"),
            show_fields: shared,
        });
        let fields = vec![first, second, field("detail", 3)];

        let mut answers = BTreeMap::new();
        answers.insert(String::from("first"), answer("yes"));
        answers.insert(String::from("second"), answer("yes"));
        let visible = resolve_visible_fields(&fields, &answers);
        let ids: Vec<&str> = visible.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "detail", "second"]);
    }

    #[test]
    fn test_rule_cycle_does_not_loop() {
        // Mutually-revealing fields are both children, so neither is
        // reachable from the top level; resolution must terminate with
        // nothing emitted rather than recurse forever.
        let mut a = field("a", 1);
        a.conditional_rules.push(ConditionalRule {
            trigger_value: String::from("x"),
            show_fields: vec![String::from("b")],
        });
        let mut b = field("b", 2);
        b.conditional_rules.push(ConditionalRule {
            trigger_value: String::from("x"),
            show_fields: vec![String::from("a")],
        });
        let fields = vec![a, b];

        let mut answers = BTreeMap::new();
        answers.insert(String::from("a"), answer("x"));
        answers.insert(String::from("b"), answer("x"));
        let visible = resolve_visible_fields(&fields, &answers);
        assert!(visible.is_empty());
    }
}
