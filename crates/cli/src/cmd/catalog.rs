//! Catalog browsing commands: `prov stacks`, `prov provisions`, `prov projects`.

use anyhow::{Context, Result, bail};
use serde::Serialize;

use provisioner_lib::catalog::Catalog;
use provisioner_lib::config::Settings;

use crate::output::{OutputFormat, print_info, print_json, symbols};

fn load_catalog(settings: &Settings) -> Result<Catalog> {
  settings.load_catalog().context("Failed to load catalog")
}

pub fn cmd_stacks(settings: &Settings, output: OutputFormat) -> Result<()> {
  let catalog = load_catalog(settings)?;

  if output.is_json() {
    return print_json(&catalog.stacks);
  }

  if catalog.stacks.is_empty() {
    print_info("No stacks in catalog");
    return Ok(());
  }

  for stack in &catalog.stacks {
    let count = catalog.provisions_for(&stack.id).count();
    println!("{:<12} {} ({} provisions)", stack.id, stack.label, count);
    if !stack.description.is_empty() {
      println!("{:<12} {}", "", stack.description);
    }
  }

  Ok(())
}

/// List provisions for `stack`, or for the session's selected stack.
pub fn cmd_provisions(settings: &Settings, stack: Option<String>, output: OutputFormat) -> Result<()> {
  let catalog = load_catalog(settings)?;

  let stack = match stack {
    Some(stack) => stack,
    None => {
      let session = settings.session_store();
      let store = session.load().context("Failed to load session")?;
      match store.selected_stack {
        Some(stack) => stack,
        None => bail!("No stack selected. Pass a stack id or run 'prov select <STACK>' first."),
      }
    }
  };

  if catalog.stack(&stack).is_none() {
    bail!("Unknown stack: {}", stack);
  }

  let items: Vec<_> = catalog.provisions_for(&stack).collect();

  if output.is_json() {
    return print_json(&items);
  }

  if items.is_empty() {
    print_info(&format!("Stack '{}' has no provisions", stack));
    return Ok(());
  }

  for item in items {
    let marker = if item.required { symbols::REQUIRED } else { " " };
    let versions = if item.versions.is_empty() {
      String::new()
    } else {
      format!(" [{}]", item.versions.join(", "))
    };
    println!(
      "{} {:<18} {:<14} {}{}",
      marker, item.id, item.category, item.label, versions
    );
  }

  Ok(())
}

pub fn cmd_projects(settings: &Settings, output: OutputFormat) -> Result<()> {
  let catalog = load_catalog(settings)?;

  if output.is_json() {
    #[derive(Serialize)]
    struct ProjectItem<'a> {
      id: &'a str,
      name: &'a str,
      stack: &'a str,
      provisions: &'a [String],
    }

    let items: Vec<ProjectItem<'_>> = catalog
      .projects
      .iter()
      .map(|p| ProjectItem {
        id: &p.id,
        name: &p.name,
        stack: &p.stack,
        provisions: &p.provisions,
      })
      .collect();
    return print_json(&items);
  }

  if catalog.projects.is_empty() {
    print_info("No projects in catalog");
    return Ok(());
  }

  for project in &catalog.projects {
    println!(
      "{:<10} {:<20} {:<8} {}",
      project.id,
      project.name,
      project.stack,
      project.provisions.join(", ")
    );
  }

  Ok(())
}
