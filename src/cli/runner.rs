//! Runner wiring the audit workflow together

use std::path::Path;

use regex::Regex;

use crate::audit::{confirm, report, selection};
use crate::cli::args::Args;
use crate::error::Result;
use crate::output::OutputManager;
use crate::registry::component::ImageComponent;
use crate::registry::client::NexusClient;

pub struct Runner {
    args: Args,
    output: OutputManager,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        let output = OutputManager::new(args.verbose);
        Self { args, output }
    }

    pub async fn run(&self) -> Result<()> {
        self.args.validate()?;
        let pattern = Regex::new(&self.args.pattern)?;
        let mode = self.args.mode();

        self.output.step(mode.description());

        let client = NexusClient::builder(self.args.url.as_str())
            .with_auth(self.args.credentials())
            .build()?;
        self.output.detail(&format!("REST base: {}", client.base_url()));

        self.output.step(&format!(
            "Enumerating components in {}",
            self.args.repo
        ));
        let items = client.search_components(&self.args.repo).await?;
        let components = selection::eligible_components(items);
        self.output.detail(&format!(
            "{} eligible components enumerated",
            components.len()
        ));

        let selected = selection::select(&components, &pattern, mode);

        if mode.is_destructive() {
            self.prune(&client, &selected).await
        } else {
            self.list(&selected)
        }
    }

    /// List mode: print each match, snapshot to CSV, report the count.
    fn list(&self, selected: &[&ImageComponent]) -> Result<()> {
        for component in selected {
            println!(
                "Name: {}\nVersion: {}\nID: {}\n",
                component.name, component.version, component.id
            );
        }

        report::write_audit_file(Path::new(report::AUDIT_CSV), selected)?;
        self.output.detail(&format!("Snapshot written to {}", report::AUDIT_CSV));

        println!(
            "Found {} images matching {} in {}",
            selected.len(),
            self.args.pattern,
            self.args.repo
        );
        Ok(())
    }

    /// Keep/Delete modes: print the marked set, gate, then delete
    /// sequentially. The first non-204 response aborts the run through
    /// `?`, abandoning the remaining deletions.
    async fn prune(&self, client: &NexusClient, marked: &[&ImageComponent]) -> Result<()> {
        if marked.is_empty() {
            self.output.info("No images marked for deletion");
            return Ok(());
        }

        println!("The following images will be deleted:");
        for component in marked {
            println!("{}", component);
        }

        let confirmed = self.args.yes || confirm::gate_deletion(marked.len())?;
        if !confirmed {
            self.output.info("Aborted, nothing deleted");
            return Ok(());
        }

        for component in marked {
            println!("Deleting {}:{}", component.name, component.version);
            client.delete_component(component).await?;
        }

        self.output.success(&format!(
            "Deleted {} images from {}",
            marked.len(),
            self.args.repo
        ));
        Ok(())
    }
}
