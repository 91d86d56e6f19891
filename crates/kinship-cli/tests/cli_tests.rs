//! Integration tests for kinship-cli
//!
//! These tests load a family-tree document and a config file from disk and
//! run commands end to end through the library API.

use kinship_cli::cli::{PairArgs, PersonArgs, WindowArgs};
use kinship_cli::config::OutputFormat;
use kinship_cli::{commands, phrase, Command, Config, Context, Formatter};
use kinship_store::MemoryStore;
use std::fs;
use tempfile::TempDir;

const TREE: &str = r#"{
    "people": [
        {"handle": "I1", "gender": "male", "name": "Walter"},
        {"handle": "I2", "gender": "female", "name": "Edith"},
        {"handle": "I3", "gender": "male", "name": "Harold"},
        {"handle": "I4", "gender": "female", "name": "Mabel"},
        {"handle": "I5", "gender": "male", "name": "Roy"},
        {"handle": "I6", "gender": "female", "name": "Joan"},
        {"handle": "I7", "gender": "female", "name": "Pearl"},
        {"handle": "I8", "gender": "female", "name": "Vera"}
    ],
    "families": [
        {"handle": "F1", "father": "I1", "mother": "I2", "children": ["I3", "I4"],
         "union_type": "married"},
        {"handle": "F2", "father": "I3", "children": ["I5"]},
        {"handle": "F3", "mother": "I4", "children": ["I6"]},
        {"handle": "F4", "mother": "I6", "children": ["I7"]},
        {"handle": "F5", "father": "I3", "mother": "I8", "children": [], "union_type": "married"}
    ]
}"#;

fn context(dir: &TempDir, config_toml: &str) -> anyhow::Result<(Config, Context)> {
    let tree = dir.path().join("family.json");
    fs::write(&tree, TREE)?;

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!("{config_toml}\n[settings]\ntree = {:?}\nformat = \"quiet\"\n", tree),
    )?;

    let config = Config::load(Some(&config_path))?;
    let tree = config
        .settings
        .tree
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no tree"))?;
    let store = MemoryStore::load(tree)?;
    let ctx = Context::new(
        store,
        config.engine.clone(),
        Formatter::new(config.settings.format, false),
        phrase::formatter_for(&config.settings.locale)?,
    );
    Ok((config, ctx))
}

fn pair(a: &str, b: &str) -> PairArgs {
    PairArgs {
        a: a.to_string(),
        b: b.to_string(),
    }
}

#[test]
fn test_relate_from_documents() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (config, ctx) = context(&dir, "")?;
    assert_eq!(config.settings.format, OutputFormat::Quiet);

    assert_eq!(commands::execute(Command::Relate(pair("I5", "I6")), &ctx)?, "first cousin");
    assert_eq!(
        commands::execute(Command::Relate(pair("I5", "I7")), &ctx)?,
        "first cousin once removed"
    );
    assert_eq!(commands::execute(Command::Relate(pair("I7", "I3")), &ctx)?, "great-uncle");
    assert_eq!(commands::execute(Command::Relate(pair("I7", "I1")), &ctx)?, "great-grandfather");
    Ok(())
}

#[test]
fn test_step_and_in_law_from_documents() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, ctx) = context(&dir, "")?;

    // Vera married Roy's father Harold
    assert_eq!(commands::execute(Command::Relate(pair("I5", "I8")), &ctx)?, "stepmother");
    assert_eq!(commands::execute(Command::Relate(pair("I8", "I5")), &ctx)?, "stepson");
    assert_eq!(commands::execute(Command::Relate(pair("I8", "I1")), &ctx)?, "father-in-law");
    assert_eq!(commands::execute(Command::Relate(pair("I2", "I8")), &ctx)?, "daughter-in-law");
    Ok(())
}

#[test]
fn test_listings_from_documents() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, ctx) = context(&dir, "")?;

    let ancestors = commands::execute(
        Command::Ancestors(WindowArgs {
            person: "I7".to_string(),
            within: Some(2),
        }),
        &ctx,
    )?;
    assert_eq!(ancestors, "I6\nI4");

    let descendants = commands::execute(
        Command::Descendants(WindowArgs {
            person: "I2".to_string(),
            within: None,
        }),
        &ctx,
    )?;
    assert_eq!(descendants, "I3\nI4\nI5\nI6\nI7");

    let kin = commands::execute(
        Command::Kin(PersonArgs {
            person: "I5".to_string(),
        }),
        &ctx,
    )?;
    assert_eq!(kin.lines().count(), 6);

    let common = commands::execute(Command::Common(pair("I5", "I7")), &ctx)?;
    assert_eq!(common, "I1 I2");
    Ok(())
}

#[test]
fn test_engine_table_from_config() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (config, ctx) = context(&dir, "[engine]\nmax_generations = 1\n")?;
    assert_eq!(config.engine.max_generations, Some(1));

    // the grandparents are out of reach with a one-generation cap
    assert_eq!(commands::execute(Command::Relate(pair("I5", "I6")), &ctx)?, "not related");
    Ok(())
}

#[test]
fn test_unknown_person_is_reported() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, ctx) = context(&dir, "")?;
    let err = commands::execute(Command::Relate(pair("I5", "I99")), &ctx).unwrap_err();
    assert!(err.to_string().contains("I99"));
    Ok(())
}
