use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use menu_roulette::{filter_items, load_menus, spin, Config, MenuItem, MenuQuery};

#[derive(Debug, PartialEq)]
enum Command {
    List,
    Spin,
}

#[derive(Debug, PartialEq)]
struct CliArgs {
    command: Command,
    query: MenuQuery,
    csv_path: Option<PathBuf>,
}

const USAGE: &str = "Usage: menu-roulette <list|spin> [--category C] [--meal M] [--csv PATH]";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let csv_path = match cli.csv_path {
        Some(path) => path,
        None => Config::load()?.csv_path,
    };

    let menus = load_menus(&csv_path)
        .with_context(|| format!("Failed to load menus from {:?}", csv_path))?;

    match cli.command {
        Command::List => {
            run_list(&menus, &cli.query);
            Ok(())
        }
        Command::Spin => run_spin(&menus, &cli.query),
    }
}

fn run_list(menus: &[MenuItem], query: &MenuQuery) {
    let items = filter_items(menus, query);

    for item in &items {
        println!("{}", describe(item));
    }
    println!("\n✓ {} menus", items.len());
}

fn run_spin(menus: &[MenuItem], query: &MenuQuery) -> Result<()> {
    match spin(menus, query, &mut rand::rng()) {
        Ok(winner) => {
            println!("🎉 {}", describe(winner));
            Ok(())
        }
        Err(_) => bail!("❌ 조건에 맞는 후보가 없습니다."),
    }
}

fn describe(item: &MenuItem) -> String {
    let id = item.id.map(|id| format!("#{id} ")).unwrap_or_default();
    let category = item.category.as_deref().unwrap_or("-");
    format!("{id}{} [{category}] {}", item.name, item.meal_times.join(", "))
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut iter = args.iter();

    let command = match iter.next().map(String::as_str) {
        Some("list") => Command::List,
        Some("spin") => Command::Spin,
        Some(other) => bail!("Unknown command {other:?}\n{USAGE}"),
        None => bail!("{USAGE}"),
    };

    let mut query = MenuQuery::new();
    let mut csv_path = None;

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .with_context(|| format!("Missing value for {flag}\n{USAGE}"))?;

        match flag.as_str() {
            "--category" => query.category = Some(value.clone()),
            "--meal" => query.meal = Some(value.clone()),
            "--csv" => csv_path = Some(PathBuf::from(value)),
            other => bail!("Unknown option {other:?}\n{USAGE}"),
        }
    }

    Ok(CliArgs {
        command,
        query,
        csv_path,
    })
}
