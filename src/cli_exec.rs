use anyhow::{Context, Result};

use storyteller::labels::{seconds_label, vote_label};
use storyteller::model::{ClientConfig, Location, StoryId, StorySnapshot, StoryState};
use storyteller::remote::ApiClient;

use crate::Commands;

pub(super) async fn handle_command(command: Commands, config: &ClientConfig) -> Result<()> {
    let client = ApiClient::new(config.base_url.clone())?;
    tracing::debug!(base_url = client.base_url(), "using story server");

    match command {
        Commands::Watch { .. } => anyhow::bail!("`watch` needs the interactive terminal view"),

        Commands::Show { story, json } => {
            let snapshot = client
                .get_story(story)
                .await
                .with_context(|| format!("get story {}", story))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&snapshot).context("serialize story json")?
                );
            } else {
                for line in story_lines(story, &snapshot) {
                    println!("{}", line);
                }
            }
        }

        Commands::Paragraph {
            story,
            number,
            json,
        } => {
            let detail = client
                .get_paragraph(story, number)
                .await
                .with_context(|| format!("get paragraph {}", Location::paragraph(story, number)))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&detail).context("serialize paragraph json")?
                );
            } else {
                println!("{}. {}", detail.number, detail.text);
                if detail.branches.is_empty() {
                    println!("(no branches)");
                }
                for b in detail.branches {
                    let at = b
                        .story_id
                        .map(|id| Location::paragraph(id, b.number).to_string())
                        .unwrap_or_else(|| b.number.to_string());
                    println!("  {}  {}", at, b.text);
                }
            }
        }

        Commands::Lock { story, json } => {
            let grant = client
                .lock_story(story)
                .await
                .with_context(|| format!("lock story {}", story))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&grant).context("serialize lock json")?
                );
            } else {
                println!("auth: {}", grant.auth);
                println!("expires in {}", seconds_label(grant.seconds()));
            }
        }

        Commands::Suggest { story, auth, text } => {
            client
                .suggest_paragraph(story, &text, &auth)
                .await
                .with_context(|| format!("suggest paragraph for story {}", story))?;
            println!("Paragraph submitted for review");
        }

        Commands::Vote { story, vote } => {
            client
                .vote(story, vote.into())
                .await
                .with_context(|| format!("vote on story {}", story))?;
            println!("Vote recorded");
        }

        Commands::Branch { story } => {
            let new_id = client
                .branch_story(story)
                .await
                .with_context(|| format!("branch story {}", story))?;
            println!("{}", Location::story(new_id));
        }

        Commands::Add { story, after, text } => {
            let added = client
                .add_paragraph(story, after, &text)
                .await
                .with_context(|| format!("add paragraph to story {}", story))?;
            if added.branched {
                println!("Branched into a new story");
            }
            println!("{}", added.location());
        }
    }

    Ok(())
}

fn story_lines(story: StoryId, s: &StorySnapshot) -> Vec<String> {
    let mut out = vec![format!(
        "story {}  state={}  length={}",
        s.id.unwrap_or(story),
        s.state.as_str(),
        s.length
    )];
    for p in &s.paragraphs {
        out.push(format!("{:>4}. {}", p.number, p.text));
    }
    if s.state == StoryState::Pending {
        out.push(format!("pending: {}", s.review_text()));
        out.push(format!(
            "{}, {}{}",
            vote_label(s.yes_votes, "yes"),
            vote_label(s.no_votes, "no"),
            if s.can_vote { " (you can vote)" } else { "" }
        ));
    }
    if !s.branches.is_empty() {
        let from: Vec<String> = s
            .branches
            .iter()
            .map(|b| Location::paragraph(b.story_id, b.paragraph_number).to_string())
            .collect();
        out.push(format!("branched from: {}", from.join(", ")));
    }
    out
}
