//! The `pathwise quiz` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pathwise_core::catalog;
use pathwise_core::config::load_config_from;
use pathwise_core::content::learning_content;
use pathwise_core::feedback::random_feedback;
use pathwise_core::parser::parse_catalog;
use pathwise_core::quiz::QuizSession;
use pathwise_core::session::StudentSession;

pub fn execute(
    catalog_path: Option<PathBuf>,
    count: Option<usize>,
    seed: Option<u64>,
    answers: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let questions = match catalog_path.or(config.catalog) {
        Some(path) => parse_catalog(&path)?.questions,
        None => catalog::builtin(),
    };
    let count = count.unwrap_or(config.quiz_size);

    let mut rng = match seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut quiz = QuizSession::generate(&questions, count, &mut rng)?;

    match answers {
        Some(list) => {
            for answer in parse_answers(&list)? {
                quiz.answer(answer)?;
            }
        }
        None => ask_interactively(&mut quiz)?,
    }

    let result = quiz.finish()?;
    let mut session = StudentSession::new();
    let engagement = session.record_quiz(result.clone());
    let level = result.learning_level();

    println!(
        "Score: {}/{} ({}%)",
        result.score(),
        result.total_questions(),
        result.percentage()
    );
    println!("Learning level: {level}");
    println!("Engagement: {engagement}");
    println!("\n{}", random_feedback(level, &mut rng));
    println!("\nNext lesson: {}", learning_content(level).title);

    Ok(())
}

fn parse_answers(list: &str) -> Result<Vec<usize>> {
    let list = list.trim();
    let list = list.strip_suffix(',').unwrap_or(list);
    list.split(',')
        .enumerate()
        .map(|(i, s)| {
            let s = s.trim();
            if s.is_empty() {
                anyhow::bail!("answer {} is empty", i + 1);
            }
            s.parse::<usize>()
                .with_context(|| format!("invalid answer index: {s}"))
        })
        .collect()
}

fn ask_interactively(quiz: &mut QuizSession) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    while let Some(question) = quiz.current() {
        let (answered, total) = quiz.progress();
        println!("\nQuestion {} of {total}: {}", answered + 1, question.question);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {i}) {option}");
        }
        print!("> ");
        stdout.flush()?;

        let line = lines
            .next()
            .context("ran out of input before the quiz was finished")?
            .context("failed to read answer")?;
        let answer: usize = line
            .trim()
            .parse()
            .with_context(|| format!("invalid answer index: {}", line.trim()))?;
        quiz.answer(answer)?;
    }

    Ok(())
}
