use anyhow::Result;
use std::io::{BufRead, Write};

use lista_store::{ItemStore, KvBackend};
use lista_types::{Status, StatusFilter};

use crate::controller::{AppController, ListAction};
use crate::presentation::ConsoleView;

/// Interactive console mode: one long-lived controller, events dispatched
/// from a read-eval loop. Notices are deferred and printed from the active
/// stack before each prompt, so they stack and self-dismiss on their TTL.
pub fn handle<B: KvBackend>(store: ItemStore<B>, view: ConsoleView) -> Result<()> {
    let view = view.with_deferred_notices();
    let mut controller = AppController::new(store, view);
    controller.refresh()?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        for notice in controller.active_notices() {
            controller.view_mut().print_notice(&notice);
        }

        eprint!("lista> ");
        let _ = std::io::stderr().flush();

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let (command, rest) = split_command(&line);

        match command {
            "" => {}
            "q" | "quit" | "exit" => break,
            "help" => print_help(),
            "list" | "ls" => controller.refresh()?,
            "add" => {
                let status = match prompt_status(&mut lines, Status::default())? {
                    Some(status) => status,
                    None => break,
                };
                controller.submit(rest, status)?;
            }
            "edit" => {
                controller.list_click(ListAction::Edit, rest)?;
                let Some(base) = controller.editing_item().cloned() else {
                    // Stale id: the click is silently ignored.
                    continue;
                };
                let Some(titulo) = prompt_text(&mut lines, "titulo", &base.titulo)? else {
                    break;
                };
                let Some(status) = prompt_status(&mut lines, base.status)? else {
                    break;
                };
                controller.submit(&titulo, status)?;
            }
            "delete" | "rm" => {
                let prompt = format!("delete '{}'? (y/N)", rest);
                let Some(answer) = prompt_text(&mut lines, &prompt, "n")? else {
                    break;
                };
                if matches!(answer.to_lowercase().as_str(), "y" | "yes" | "s" | "sim") {
                    controller.view_mut().set_assume_yes(true);
                    controller.list_click(ListAction::Delete, rest)?;
                    controller.view_mut().set_assume_yes(false);
                }
            }
            "search" => controller.search_input(rest)?,
            "filter" => match rest.parse::<StatusFilter>() {
                Ok(filter) => controller.filter_change(filter)?,
                Err(err) => eprintln!("{}", err),
            },
            other => eprintln!("Unknown command '{}'; try 'help'.", other),
        }
    }

    Ok(())
}

fn split_command(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    }
}

/// Read one form field; empty input keeps the default. Returns `None` on EOF.
fn prompt_text(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    label: &str,
    default: &str,
) -> Result<Option<String>> {
    eprint!("{} [{}]: ", label, default);
    let _ = std::io::stderr().flush();

    let Some(line) = lines.next() else {
        return Ok(None);
    };
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(Some(default.to_string()))
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn prompt_status(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    default: Status,
) -> Result<Option<Status>> {
    loop {
        let Some(answer) = prompt_text(lines, "status", default.label())? else {
            return Ok(None);
        };
        match answer.parse::<Status>() {
            Ok(status) => return Ok(Some(status)),
            Err(err) => eprintln!("{}", err),
        }
    }
}

fn print_help() {
    eprintln!("Commands:");
    eprintln!("  add <titulo>       Add an item (prompts for status)");
    eprintln!("  edit <id>          Edit an item (prompts for fields)");
    eprintln!("  delete <id>        Delete an item (asks for confirmation)");
    eprintln!("  search <text>      Filter the list by title substring");
    eprintln!("  filter <status>    Show one status only; 'todos' shows all");
    eprintln!("  list               Reload and re-render");
    eprintln!("  quit               Leave interactive mode");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_separates_verb_and_argument() {
        assert_eq!(split_command("add Buy milk"), ("add", "Buy milk"));
        assert_eq!(split_command("  list  "), ("list", ""));
        assert_eq!(split_command(""), ("", ""));
    }

    #[test]
    fn prompt_text_defaults_on_empty_input() {
        let mut lines = vec![Ok("".to_string())].into_iter();
        let answer = prompt_text(&mut lines, "titulo", "kept").unwrap();
        assert_eq!(answer.as_deref(), Some("kept"));
    }

    #[test]
    fn prompt_text_returns_none_on_eof() {
        let mut lines = std::iter::empty();
        assert!(prompt_text(&mut lines, "titulo", "x").unwrap().is_none());
    }

    #[test]
    fn prompt_status_retries_until_valid() {
        let mut lines = vec![Ok("bogus".to_string()), Ok("concluido".to_string())].into_iter();
        let status = prompt_status(&mut lines, Status::Pendente).unwrap();
        assert_eq!(status, Some(Status::Concluido));
    }
}
