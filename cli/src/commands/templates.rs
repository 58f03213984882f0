use std::num::ParseIntError;

use clap::Subcommand;
use colored::*;

use crate::pprint;
use crate::terminal::{colors, format, print};
use pactum_common::config::Config;
use pactum_common::models::ids::{ElementId, TemplateId};
use pactum_common::models::template::TemplatePatch;
use pactum_common::views::TemplateView;
use pactum_core::engine::Engine;
use pactum_core::templates::TemplateDraft;

/// Comma separated element ids. An empty string is an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds(pub Vec<ElementId>);

pub fn parse_element_ids(raw: &str) -> Result<ElementIds, ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse::<ElementId>)
        .collect::<Result<Vec<_>, _>>()
        .map(ElementIds)
}

#[derive(Subcommand)]
pub enum TemplateCommand {
    /// List stored templates with their elements resolved
    #[command(alias = "ls")]
    List,
    /// Show a single template
    Show { id: TemplateId },
    /// Check an element sequence without storing anything
    Validate {
        #[arg(long, value_parser = parse_element_ids)]
        elements: ElementIds,
    },
    /// Compose a new template
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        active: bool,
        /// Element ids in presentation order, e.g. 1,2,3
        #[arg(long, value_parser = parse_element_ids)]
        elements: ElementIds,
    },
    /// Patch the given fields of a template
    Update {
        id: TemplateId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        /// Replaces the whole sequence. An empty value clears it
        #[arg(long, value_parser = parse_element_ids)]
        elements: Option<ElementIds>,
    },
}

pub fn run(command: TemplateCommand, engine: &Engine, cfg: &Config) -> anyhow::Result<()> {
    let composer = &engine.templates;
    match command {
        TemplateCommand::List => {
            let views = composer
                .list()?
                .iter()
                .map(|template| composer.to_view(template))
                .collect::<Result<Vec<TemplateView>, _>>()?;
            print_templates(&views, cfg)?;
        }
        TemplateCommand::Show { id } => {
            let view = composer.view(id)?;
            print_templates(std::slice::from_ref(&view), cfg)?;
        }
        TemplateCommand::Validate { elements } => {
            let resolved = composer.validator().validate(&elements.0)?;
            if cfg.json {
                return print::json(&serde_json::json!({ "valid": true, "elements": elements.0 }));
            }
            print::header("template validation", cfg.quiet);
            let verdict: ColoredString = format!("{} elements, all rules pass", resolved.len())
                .color(colors::OPTIONAL);
            print::aligned_line("valid", verdict);
            print::end_of_program(cfg.quiet);
        }
        TemplateCommand::Create {
            name,
            active,
            elements,
        } => {
            let template = composer.create(TemplateDraft {
                name,
                active: Some(active),
                elements: elements.0,
            })?;
            let view = composer.to_view(&template)?;
            print_templates(std::slice::from_ref(&view), cfg)?;
        }
        TemplateCommand::Update {
            id,
            name,
            active,
            elements,
        } => {
            let patch = TemplatePatch {
                name,
                active,
                elements: elements.map(|ids| ids.0),
            };
            let template = composer.update(id, patch)?;
            let view = composer.to_view(&template)?;
            print_templates(std::slice::from_ref(&view), cfg)?;
        }
    }
    Ok(())
}

fn print_templates(views: &[TemplateView], cfg: &Config) -> anyhow::Result<()> {
    if cfg.json {
        return print::json(views);
    }

    print::header("contract templates", cfg.quiet);
    if views.is_empty() {
        print::no_results("templates");
        return Ok(());
    }

    for (idx, view) in views.iter().enumerate() {
        let title: String = format!("{}", view.name.bold());
        print::tree_head(view.id, &title);
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::template_to_key_value_pair(view));
        }
        if idx + 1 != views.len() {
            pprint!();
        }
    }
    print::end_of_program(cfg.quiet);
    Ok(())
}
