use clap::Parser;
use fixturegen::application::Evaluator;
use fixturegen::cli::Cli;
use fixturegen::config::{load_schema, load_schemas_from_dir, Settings};
use fixturegen::domain::{Document, FieldDef, PayloadError, ValueProvider};
use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    // Logs go to stderr so stdout only carries the generated JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut evaluator = settings.evaluator();

    let output = if cli.schema.is_dir() {
        let mut by_name = Map::new();
        for schema in load_schemas_from_dir(&cli.schema)? {
            info!(schema = %schema.name, fields = schema.fields.len(), "Generating documents");
            let rendered = render(&mut evaluator, &schema.fields, cli.count)?;
            by_name.insert(schema.name, rendered);
        }
        Value::Object(by_name)
    } else {
        let fields = load_schema(&cli.schema)?;
        info!(schema = %cli.schema.display(), fields = fields.len(), "Generating documents");
        render(&mut evaluator, &fields, cli.count)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// A single document for `count == 1`, otherwise an array of documents.
fn render<P: ValueProvider>(
    evaluator: &mut Evaluator<P>,
    fields: &[FieldDef],
    count: usize,
) -> Result<Value, PayloadError> {
    let mut documents: Vec<Value> = evaluator
        .evaluate_many(fields, count)?
        .into_iter()
        .map(Document::into_value)
        .collect();

    if count == 1 {
        Ok(documents.pop().unwrap_or(Value::Null))
    } else {
        Ok(Value::Array(documents))
    }
}
