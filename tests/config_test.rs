use fixturegen::config::{load_schema, load_schemas_from_dir, Settings};
use fixturegen::domain::{FieldKind, ResolvedKind};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_settings_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("fixturegen.toml");

    let settings_toml = r#"
log_level = "debug"

[generator]
seed = 7
max_depth = 4
strict_names = true
"#;
    fs::write(&path, settings_toml)?;

    let settings = Settings::from_path(&path)?;
    assert_eq!(settings.log_level, "debug");
    assert_eq!(settings.generator.seed, Some(7));
    assert_eq!(settings.generator.max_depth, 4);
    assert!(settings.generator.strict_names);

    Ok(())
}

#[test]
fn test_missing_settings_file_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings::from_path(temp_dir.path().join("absent.toml"))?;

    assert_eq!(settings.log_level, "info");
    assert_eq!(settings.generator.max_depth, 32);
    assert!(!settings.generator.strict_names);

    Ok(())
}

#[test]
fn test_invalid_settings_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("fixturegen.toml");
    fs::write(&path, "[generator]\nmax_depth = 0\n")?;

    let err = Settings::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));

    Ok(())
}

#[test]
fn test_load_schema_json_and_yaml() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let users_json = r#"
[
    { "name": "id", "kind": "uuid" },
    { "name": "email", "fake_query": "{firstname}@example.com" },
    { "name": "age", "kind": "int", "int_range": [18, 65] }
]
"#;
    fs::write(root.join("users.json"), users_json)?;

    let orders_yaml = r#"
- name: order_id
  kind: uuid
- name: items
  kind: object_list
  int_range: [2, 2]
  children:
    - name: sku
      kind: fixed_char
      length: 8
"#;
    fs::write(root.join("orders.yaml"), orders_yaml)?;

    let users = load_schema(&root.join("users.json"))?;
    assert_eq!(users.len(), 3);
    assert_eq!(users[1].resolved_kind(), ResolvedKind::String);
    assert_eq!(users[2].int_range, Some((18, 65)));

    let orders = load_schema(&root.join("orders.yaml"))?;
    assert_eq!(orders[1].kind, FieldKind::ObjectList);
    assert_eq!(orders[1].children[0].length, Some(8));

    Ok(())
}

#[test]
fn test_load_schema_rejects_unknown_extension() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("users.txt");
    fs::write(&path, "[]")?;

    let err = load_schema(&path).unwrap_err();
    assert!(err.to_string().contains("Unsupported schema file extension"));

    Ok(())
}

#[test]
fn test_load_schemas_from_dir() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("zeta.yml"), "- name: z\n  kind: bool\n")?;
    fs::write(root.join("alpha.json"), r#"[{ "name": "a", "kind": "float" }]"#)?;
    fs::write(root.join("README.md"), "not a schema")?;

    let schemas = load_schemas_from_dir(root)?;
    let names: Vec<&str> = schemas.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
    assert_eq!(schemas[1].fields[0].kind, FieldKind::Bool);

    Ok(())
}

#[test]
fn test_seeded_evaluator_is_reproducible() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("fixturegen.toml");
    fs::write(&path, "[generator]\nseed = 99\n")?;

    let fields = vec![
        fixturegen::domain::FieldDef::uuid("id"),
        fixturegen::domain::FieldDef::int("n"),
        fixturegen::domain::FieldDef::string("name", "{firstname}"),
    ];

    let settings = Settings::from_path(&path)?;
    let first = settings.evaluator().evaluate(&fields)?;
    let second = settings.evaluator().evaluate(&fields)?;
    assert_eq!(first, second);

    Ok(())
}
