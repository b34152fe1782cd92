//! The `duty show <slug>` command — the detail view for one record.

use anyhow::Result;

use duty_guide_core::model::find_by_slug;
use duty_guide_core::store::CatalogStore;

use crate::config::Config;
use crate::loader;

pub async fn run_show<S: CatalogStore>(config: &Config, store: &S, slug: &str) -> Result<()> {
    let duties = loader::load_catalog(config, store).await?;

    let duty = match find_by_slug(&duties, slug) {
        Some(duty) => duty,
        None => {
            eprintln!("Error: no duty with slug '{}'", slug);
            std::process::exit(1);
        }
    };

    println!("--- {} ---", duty.title);
    println!("id:          {}", duty.id);
    println!("slug:        {}", duty.slug);
    println!("type:        {}", duty.duty_type);
    println!("patch:       {}", duty.patch);
    println!("tags:        {}", duty.tags.join(", "));
    println!("image:       {}", duty.background_image);
    println!();
    println!("{}", duty.description);
    Ok(())
}
