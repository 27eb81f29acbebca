use anyhow::Result;
use clap::Parser;
use contacts_client::config::Config;
use contacts_client::terminal::{self, Command};
use contacts_client::{ContactsView, Error, HttpContactApi};
use log::info;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let conf = Config::parse();
    info!("Using contacts server at {}", conf.backend_url);
    let api = HttpContactApi::new(&conf.backend_url)?;
    let mut view = ContactsView::new(Arc::new(api));

    println!("Contacts Dashboard, type 'help' for commands");
    match view.refresh().await {
        Ok(()) => println!("{}", terminal::render_contacts(view.contacts(), None)),
        Err(e) => println!("Could not load contacts: {e}"),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match terminal::parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        handle_command(&mut view, command).await;
    }

    Ok(())
}

async fn handle_command(view: &mut ContactsView, command: Command) {
    match command {
        Command::List => match view.refresh().await {
            Ok(()) => print_contacts(view),
            Err(e) => println!("Could not load contacts: {e}"),
        },
        Command::Set(field, value) => {
            view.set_field(field, &value);
            println!("{}", terminal::render_draft(view.draft(), view.edit_target()));
        }
        Command::Show => {
            println!("{}", terminal::render_draft(view.draft(), view.edit_target()));
        }
        Command::Edit(target) => match terminal::resolve_target(view, &target).cloned() {
            Some(contact) => {
                view.begin_edit(&contact);
                println!("{}", terminal::render_draft(view.draft(), view.edit_target()));
            }
            None => println!("No contact '{target}' in the list"),
        },
        Command::Save => match view.submit().await {
            Ok(saved) => {
                println!("Saved contact {}", saved.id);
                print_contacts(view);
            }
            Err(Error::Reload { id, source }) => {
                println!("Saved contact {id}, but the list could not be reloaded: {source}");
                println!("Type 'list' to try again");
            }
            // the draft stays as it is, so the user can fix it and save again
            Err(e) => println!("Could not save contact: {e}"),
        },
        Command::Cancel => {
            view.cancel_edit();
            println!("Draft discarded");
        }
        Command::Delete(target) => {
            let id = match terminal::resolve_target(view, &target) {
                Some(contact) => contact.id.clone(),
                None => target,
            };
            match view.remove(&id).await {
                Ok(()) => {
                    println!("Deleted contact {id}");
                    print_contacts(view);
                }
                Err(Error::Reload { source, .. }) => {
                    println!("Deleted contact {id}, but the list could not be reloaded: {source}");
                }
                Err(e) => println!("Could not delete contact {id}: {e}"),
            }
        }
        Command::Help => println!("{}", terminal::HELP),
        Command::Quit => {}
    }
}

fn print_contacts(view: &ContactsView) {
    println!(
        "{}",
        terminal::render_contacts(view.contacts(), view.edit_target())
    );
}
