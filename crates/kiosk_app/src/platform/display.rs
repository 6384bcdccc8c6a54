use kiosk_core::Screen;

/// Renders the current screen to stdout, standing in for the TFT panel.
pub fn render(screen: &Screen) {
    for line in lines(screen) {
        println!("{}", line);
    }
}

fn lines(screen: &Screen) -> Vec<String> {
    match screen {
        Screen::Menu => vec![
            String::new(),
            "Select Category:".to_string(),
            "1:Misc   2:Prog".to_string(),
            "3:Dark   4:Pun".to_string(),
            "5:Spooky 6:X-mas".to_string(),
            "7:Any    A:Top 3".to_string(),
        ],
        Screen::FetchingJoke { category } => vec![
            String::new(),
            format!("Selected: {}", category.as_str()),
            "Fetching...".to_string(),
        ],
        Screen::Joke {
            primary,
            last_updated,
            saving,
            ..
        } => {
            let mut out = vec![String::new()];
            if let Some(time) = last_updated {
                out.push(format!("{:>40}", time));
            }
            out.push(primary.clone());
            out.push(String::new());
            match saving {
                Some(rating) => {
                    out.push(format!("Rating: {}/5", rating));
                    out.push("Saving Log...".to_string());
                }
                None => out.push("Rate (1-5) or *".to_string()),
            }
            out
        }
        Screen::Saved => vec![String::new(), "Saved!".to_string()],
        Screen::LoadingRanking => {
            vec![String::new(), "Loading Top 3 Jokes...".to_string()]
        }
        Screen::Ranking { rows } => {
            let mut out = vec![String::new(), "--- Hall of Fame ---".to_string()];
            for row in rows {
                out.push(format!("#{} [Rating: {:.1}]", row.rank, row.rating));
                out.push(truncate(&row.joke, 40));
            }
            out.push(String::new());
            out.push("Press * to Return".to_string());
            out
        }
    }
}

/// Long jokes would run off the panel; keep the first `max` characters.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}
