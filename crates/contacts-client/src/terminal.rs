use crate::view::{ContactsView, DraftField};
use contacts_core::{Contact, ContactFields};

pub const HELP: &str = "\
Commands:
  list                      reload and show all contacts
  set <field> <value>       set a draft field (first, last, email, country)
  show                      show the current draft
  edit <row|id>             load a contact into the draft
  save                      add the draft, or update the contact being edited
  cancel                    discard the draft
  delete <row|id>           delete a contact
  help                      show this help
  quit                      exit";

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Set(DraftField, String),
    Show,
    Edit(String),
    Save,
    Cancel,
    Delete(String),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    match name.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(String::from("usage: set <field> <value>"));
            }
            Ok(Command::Set(field.parse()?, value.to_owned()))
        }
        "show" => Ok(Command::Show),
        "edit" => required_target(rest, "edit").map(Command::Edit),
        "save" | "add" | "update" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "delete" | "rm" => required_target(rest, "delete").map(Command::Delete),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::from("empty command, type 'help'")),
        other => Err(format!("unknown command '{other}', type 'help'")),
    }
}

fn required_target(rest: &str, command: &str) -> Result<String, String> {
    if rest.is_empty() {
        return Err(format!("usage: {command} <row|id>"));
    }
    Ok(rest.to_owned())
}

/// Resolves a 1-based row number of the displayed table, or a contact id
pub fn resolve_target<'a>(view: &'a ContactsView, target: &str) -> Option<&'a Contact> {
    match target.parse::<usize>() {
        Ok(row) if row >= 1 => view.contacts().get(row - 1),
        _ => view.find(target),
    }
}

pub fn render_contacts(contacts: &[Contact], edit_target: Option<&str>) -> String {
    if contacts.is_empty() {
        return String::from("No contacts yet.");
    }
    let mut out = format!(
        "  {:>3}  {:<16} {:<16} {:<28} {:<12} {}\n",
        "#", "First Name", "Last Name", "Email", "Country", "Id"
    );
    for (idx, c) in contacts.iter().enumerate() {
        let marker = if edit_target == Some(c.id.as_str()) {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{marker} {:>3}  {:<16} {:<16} {:<28} {:<12} {}\n",
            idx + 1,
            c.fields.first_name,
            c.fields.last_name,
            c.fields.email,
            c.fields.country,
            c.id
        ));
    }
    out
}

pub fn render_draft(draft: &ContactFields, edit_target: Option<&str>) -> String {
    let mode = match edit_target {
        Some(id) => format!("Editing {id}"),
        None => String::from("New contact"),
    };
    format!(
        "{mode}\n  firstName: {}\n  lastName:  {}\n  email:     {}\n  country:   {}",
        draft.first_name, draft.last_name, draft.email, draft.country
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("  SAVE "), Ok(Command::Save));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("cancel"), Ok(Command::Cancel));
    }

    #[test]
    fn parses_set_with_spaces_in_value() {
        assert_eq!(
            parse_command("set country United Kingdom"),
            Ok(Command::Set(DraftField::Country, "United Kingdom".to_string()))
        );
        assert_eq!(
            parse_command("set first"),
            Ok(Command::Set(DraftField::FirstName, String::new()))
        );
        assert!(parse_command("set").is_err());
        assert!(parse_command("set phone 123").is_err());
    }

    #[test]
    fn edit_and_delete_need_a_target() {
        assert_eq!(parse_command("edit 2"), Ok(Command::Edit("2".to_string())));
        assert_eq!(
            parse_command("delete abc-123"),
            Ok(Command::Delete("abc-123".to_string()))
        );
        assert!(parse_command("edit").is_err());
        assert!(parse_command("delete  ").is_err());
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn renders_empty_table() {
        assert_eq!(render_contacts(&[], None), "No contacts yet.");
    }

    #[test]
    fn renders_rows_and_marks_edit_target() {
        let contacts = vec![
            Contact::new("a", ContactFields::new("Ada", "Lovelace", "ada@x.com", "UK")),
            Contact::new("b", ContactFields::new("Alan", "Turing", "alan@x.com", "UK")),
        ];
        let out = render_contacts(&contacts, Some("b"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("    1  Ada"));
        assert!(lines[2].starts_with("*   2  Alan"));
        assert!(lines[2].ends_with(" b"));
    }

    #[test]
    fn renders_draft_mode() {
        let draft = ContactFields::new("Ada", "", "", "");
        assert!(render_draft(&draft, None).starts_with("New contact"));
        assert!(render_draft(&draft, Some("X")).starts_with("Editing X"));
    }
}
