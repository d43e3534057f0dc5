use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("PROJECT"),
        Column::left("DEFAULT"),
    ]);

    for p in &cfg.projects {
        let is_default = if p.id == cfg.default_project { "*" } else { "" };
        table.add_row(vec![p.id.clone(), p.name.clone(), is_default.to_string()]);
    }

    println!("📁 Projects:\n");
    println!("{}", table.render());
    Ok(())
}
