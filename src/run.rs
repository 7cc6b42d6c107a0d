use log::info;

use crate::{configuration::Settings, grabber::Grabber, models::Command};

pub async fn run(settings: Settings, command: Command) -> anyhow::Result<()> {
    info!("Base url: {}", settings.base_url);
    let grabber = Grabber::new(&settings)?;

    match command {
        Command::Comic { comic, out_dir } => {
            let dir = grabber.grab_comic(&comic, out_dir.as_deref()).await?;
            info!("Comic saved to {}", dir.display());
        }
        Command::Chapters { comic } => {
            for chapter in grabber.get_chapter_list(&comic).await? {
                println!("{}\t{}", chapter.id, chapter.name);
            }
        }
        Command::Chapter {
            comic,
            chapter,
            out_dir,
        } => {
            grabber.grab_chapter(&comic, &chapter, &out_dir).await?;
        }
        Command::Page {
            comic,
            chapter,
            page,
            out_dir,
        } => {
            grabber.grab_page(&comic, &chapter, &page, &out_dir).await?;
        }
    }

    info!("Finished!");
    Ok(())
}
