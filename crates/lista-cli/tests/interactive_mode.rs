//! Interactive mode driven over stdin: one process, several events.

use anyhow::Result;
use lista_testing::{TestWorld, fixtures};
use lista_types::Status;

#[test]
fn add_flow_prompts_for_status_and_persists() -> Result<()> {
    let world = TestWorld::new();

    // add -> status prompt (empty keeps Pendente) -> quit
    let result = world.run_with_stdin(&["ui"], "add Buy milk\n\nquit\n")?;
    assert!(result.success(), "{}", result.stderr());

    let items = world.read_items()?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].titulo, "Buy milk");
    assert_eq!(items[0].status, Status::Pendente);
    Ok(())
}

#[test]
fn edit_flow_prefills_and_overwrites_fields() -> Result<()> {
    let world = TestWorld::new();
    world.seed_items(&fixtures::sample_collection())?;

    // edit m1a -> new titulo -> new status -> quit
    let input = "edit m1a\nFresh milk\nconcluido\nquit\n";
    let result = world.run_with_stdin(&["ui"], input)?;
    assert!(result.success(), "{}", result.stderr());

    let items = world.read_items()?;
    assert_eq!(items[0].id, "m1a");
    assert_eq!(items[0].titulo, "Fresh milk");
    assert_eq!(items[0].status, Status::Concluido);
    Ok(())
}

#[test]
fn edit_keeps_fields_on_empty_input() -> Result<()> {
    let world = TestWorld::new();
    world.seed_items(&fixtures::sample_collection())?;

    // Empty answers keep the stored titulo and status.
    let result = world.run_with_stdin(&["ui"], "edit m2b\n\n\nquit\n")?;
    assert!(result.success(), "{}", result.stderr());

    let items = world.read_items()?;
    assert_eq!(items[1].titulo, "Write report");
    assert_eq!(items[1].status, Status::EmAndamento);
    Ok(())
}

#[test]
fn search_rerenders_the_list_within_one_session() -> Result<()> {
    let world = TestWorld::new();
    world.seed_items(&fixtures::sample_collection())?;

    let result = world.run_with_stdin(&["ui"], "search milk\nquit\n")?;
    assert!(result.success());

    // Initial render shows everything; the post-search render drops the rest.
    let stdout = result.stdout();
    let after_search = stdout
        .split("Buy milk")
        .last()
        .expect("at least one render");
    assert!(!after_search.contains("Ship release"));
    Ok(())
}

#[test]
fn confirmed_delete_removes_the_item() -> Result<()> {
    let world = TestWorld::new();
    world.seed_items(&fixtures::sample_collection())?;

    let result = world.run_with_stdin(&["ui"], "delete m1a\ny\nquit\n")?;
    assert!(result.success(), "{}", result.stderr());

    let items = world.read_items()?;
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.id != "m1a"));
    Ok(())
}

#[test]
fn declined_delete_keeps_the_item() -> Result<()> {
    let world = TestWorld::new();
    world.seed_items(&fixtures::sample_collection())?;

    // Default answer is no.
    let result = world.run_with_stdin(&["ui"], "delete m1a\n\nquit\n")?;
    assert!(result.success());
    assert_eq!(world.read_items()?.len(), 3);
    Ok(())
}

#[test]
fn unknown_command_is_reported_and_loop_continues() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run_with_stdin(&["ui"], "frobnicate\nquit\n")?;
    assert!(result.success());
    assert!(result.stderr().contains("Unknown command"));
    Ok(())
}

#[test]
fn eof_ends_the_session_cleanly() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run_with_stdin(&["ui"], "")?;
    assert!(result.success());
    Ok(())
}
