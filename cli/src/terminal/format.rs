use colored::*;
use pactum_common::models::contract::Contract;
use pactum_common::models::element::{ContractElement, ElementBody};
use pactum_common::views::TemplateView;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn optionality(is_optional: bool) -> ColoredString {
    if is_optional {
        "optional".color(colors::OPTIONAL)
    } else {
        "required".color(colors::REQUIRED)
    }
}

pub fn element_to_key_value_pair(element: &ContractElement) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (String::from("type"), element.element_type().as_str().color(colors::SECONDARY)),
        (String::from("status"), optionality(element.is_optional)),
    ];

    match &element.body {
        ElementBody::Paragraph { text } => {
            details.push((String::from("text"), text.color(colors::TEXT_DEFAULT)));
        }
        ElementBody::Image { url } => {
            details.push((String::from("url"), url.color(colors::TEXT_DEFAULT)));
        }
        ElementBody::InputField { label, input_type } => {
            details.push((String::from("label"), label.color(colors::TEXT_DEFAULT)));
            details.push((String::from("input"), input_type.as_str().color(colors::ACCENT)));
        }
    }
    details
}

/// One line per referenced element, in template order.
pub fn template_to_key_value_pair(view: &TemplateView) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (String::from("active"), active(view.active)),
        (String::from("created"), view.created_at.color(colors::TEXT_DEFAULT)),
    ];

    for (position, element) in view.elements.iter().enumerate() {
        let value: String = format!(
            "#{} {} ({}, {})",
            element.id,
            element.name,
            element.element_type,
            if element.is_optional { "optional" } else { "required" }
        );
        details.push((format!("{}", position + 1), value.color(colors::TEXT_DEFAULT)));
    }
    details
}

pub fn contract_to_key_value_pair(contract: &Contract) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (String::from("employee"), contract.employee_id.to_string().color(colors::ACCENT)),
        (String::from("template"), contract.template_id.to_string().color(colors::ACCENT)),
        (
            String::from("signed"),
            contract.signed_date.format("%Y-%m-%d").to_string().color(colors::TEXT_DEFAULT),
        ),
    ];

    for (field, value) in &contract.contract_data {
        let rendered: String = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        details.push((field.clone(), rendered.color(colors::TEXT_DEFAULT)));
    }
    details
}

fn active(active: bool) -> ColoredString {
    if active {
        "yes".color(colors::OPTIONAL)
    } else {
        "no".color(colors::SEPARATOR)
    }
}
