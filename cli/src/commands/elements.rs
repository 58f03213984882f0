use clap::Subcommand;
use colored::*;

use crate::pprint;
use crate::terminal::{colors, format, print};
use pactum_common::config::Config;
use pactum_common::models::element::ContractElement;
use pactum_common::models::ids::ElementId;
use pactum_common::views::ElementView;
use pactum_core::elements::{ElementDraft, ElementPatch};
use pactum_core::engine::Engine;

#[derive(Subcommand)]
pub enum ElementCommand {
    /// List the supported element types
    Types,
    /// List stored elements
    #[command(alias = "ls")]
    List {
        /// Only show elements of this type
        #[arg(long = "type")]
        element_type: Option<String>,
    },
    /// Show a single element
    Show { id: ElementId },
    /// Create an element
    Create {
        /// paragraph, image or input_field
        #[arg(long = "type")]
        element_type: String,
        #[arg(long)]
        name: String,
        /// Defaults to true
        #[arg(long)]
        optional: Option<bool>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        label: Option<String>,
        /// phone, signature, email, address or name
        #[arg(long)]
        input_type: Option<String>,
    },
    /// Patch the given fields of an element
    Update {
        id: ElementId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        optional: Option<bool>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        input_type: Option<String>,
    },
}

pub fn run(command: ElementCommand, engine: &Engine, cfg: &Config) -> anyhow::Result<()> {
    match command {
        ElementCommand::Types => {
            let types: Vec<&str> = engine
                .elements
                .supported_types()
                .iter()
                .map(|t| t.as_str())
                .collect();
            if cfg.json {
                return print::json(&types);
            }
            print::header("element types", cfg.quiet);
            for element_type in types {
                print::print_status(element_type);
            }
        }
        ElementCommand::List { element_type } => {
            let elements: Vec<ContractElement> = match element_type {
                Some(element_type) => engine.elements.list_by_type(&element_type)?,
                None => engine.elements.list()?,
            };
            print_elements(&elements, cfg)?;
        }
        ElementCommand::Show { id } => {
            let element = engine.elements.get(id)?;
            print_elements(std::slice::from_ref(&element), cfg)?;
        }
        ElementCommand::Create {
            element_type,
            name,
            optional,
            text,
            url,
            label,
            input_type,
        } => {
            let draft = ElementDraft {
                element_type,
                name,
                is_optional: optional,
                text,
                url,
                label,
                input_type,
            };
            let element = engine.elements.create(draft)?;
            print_elements(std::slice::from_ref(&element), cfg)?;
        }
        ElementCommand::Update {
            id,
            name,
            optional,
            text,
            url,
            label,
            input_type,
        } => {
            let patch = ElementPatch {
                name,
                is_optional: optional,
                text,
                url,
                label,
                input_type,
            };
            let element = engine.elements.update(id, patch)?;
            print_elements(std::slice::from_ref(&element), cfg)?;
        }
    }
    Ok(())
}

fn print_elements(elements: &[ContractElement], cfg: &Config) -> anyhow::Result<()> {
    if cfg.json {
        let views: Vec<ElementView> = elements.iter().map(ElementView::from).collect();
        return print::json(&views);
    }

    print::header("contract elements", cfg.quiet);
    if elements.is_empty() {
        print::no_results("elements");
        return Ok(());
    }

    for (idx, element) in elements.iter().enumerate() {
        let title: String = format!("{}", element.name.bold());
        print::tree_head(element.id, &title);
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::element_to_key_value_pair(element));
        }
        if idx + 1 != elements.len() {
            pprint!();
        }
    }

    let total: ColoredString = format!("{} elements", elements.len()).color(colors::ACCENT);
    print::aligned_line("total", total);
    print::end_of_program(cfg.quiet);
    Ok(())
}
