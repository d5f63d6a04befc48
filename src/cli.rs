//! Terminal front-end: reads the notes, generates a quiz and lets the user take it.

use std::{
    fs,
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::{ArgGroup, Parser};

use crate::{
    app_state::AppState,
    errors::AppResult,
    models::{domain::Difficulty, dto::QuizRequestParams},
    services::{
        quiz_session_service::{QuizSession, SessionEvent, SessionUpdate},
        QuizService,
    },
};

#[derive(Debug, Parser)]
#[command(name = "notes-quiz", version, about = "Turn your notes into a multiple-choice quiz")]
#[command(group(ArgGroup::new("input").required(true).args(["notes", "text"])))]
pub struct Cli {
    /// File containing the notes to quiz on
    #[arg(short, long)]
    pub notes: Option<PathBuf>,

    /// Notes passed inline instead of a file
    #[arg(short, long)]
    pub text: Option<String>,

    /// Number of questions to ask for
    #[arg(short, long, default_value_t = 5)]
    pub questions: u8,

    /// Easy, Medium or Hard
    #[arg(short, long, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Model to use; defaults to QUIZ_MODEL or the provider's first model
    #[arg(short, long)]
    pub model: Option<String>,
}

impl Cli {
    pub fn request_params(&self, default_model: &str) -> AppResult<QuizRequestParams> {
        let notes = match (&self.notes, &self.text) {
            (Some(path), _) => fs::read_to_string(path)?,
            (None, Some(text)) => text.clone(),
            (None, None) => String::new(),
        };
        let model = self.model.as_deref().unwrap_or(default_model);

        Ok(QuizRequestParams::new(
            &notes,
            self.questions,
            self.difficulty,
            model,
        ))
    }
}

pub async fn run(cli: Cli, state: &AppState) -> AppResult<()> {
    let params = cli.request_params(&state.config.default_model)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    run_session(state, params, &mut input, &mut output).await
}

/// Generate, quiz, review, and optionally start over with the same notes.
pub async fn run_session<R, W>(
    state: &AppState,
    params: QuizRequestParams,
    input: &mut R,
    output: &mut W,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let service = state.quiz_service.as_ref();
    let mut session = QuizSession::new();

    loop {
        writeln!(output, "Generating your quiz with {}...", params.model_id)?;

        match session
            .apply(SessionEvent::GenerateRequested(params.clone()), service)
            .await
        {
            Ok(SessionUpdate::QuizReady(outcome)) => {
                writeln!(output, "Quiz generated with {} questions!", outcome.quiz.len())?;
                if let Some(warning) = outcome.warning() {
                    writeln!(output, "Warning: {}", warning)?;
                }
            }
            Ok(_) => {}
            Err(err) if err.is_retryable() => {
                log::error!("Quiz generation failed: {}", err);
                writeln!(output, "{}", err.user_message())?;
                if confirm(input, output, "Try again?")? {
                    continue;
                }
                return Ok(());
            }
            Err(err) => return Err(err),
        }

        if !take_quiz(&mut session, service, input, output).await? {
            return Ok(());
        }
        print_summary(&session, output)?;

        if !confirm(input, output, "Take a new quiz?")? {
            return Ok(());
        }
        session.apply(SessionEvent::NewQuizRequested, service).await?;
    }
}

/// Returns `false` when input ran out before the quiz was finished.
async fn take_quiz<R, W>(
    session: &mut QuizSession,
    service: &QuizService,
    input: &mut R,
    output: &mut W,
) -> AppResult<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some((position, total, question)) = session
            .current_question()
            .map(|(p, t, q)| (p, t, q.clone()))
        else {
            return Ok(true);
        };

        writeln!(output)?;
        writeln!(
            output,
            "Question {} of {} ({:.0}% done)",
            position,
            total,
            session.progress_fraction() * 100.0
        )?;
        writeln!(output, "{}", question.text())?;
        for (i, option) in question.options().iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, option)?;
        }

        let choice = loop {
            write!(output, "Choose your answer [1-4]: ")?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(false);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=4).contains(&n) => break question.options()[n - 1].clone(),
                _ => writeln!(output, "Please select an answer before submitting.")?,
            }
        };

        if let SessionUpdate::Answered(feedback) = session
            .apply(SessionEvent::AnswerSubmitted(choice), service)
            .await?
        {
            if feedback.correct {
                writeln!(output, "Correct!")?;
            } else {
                writeln!(
                    output,
                    "Incorrect. The correct answer was: {}",
                    feedback.correct_answer
                )?;
            }
        }
    }
}

fn print_summary<W: Write>(session: &QuizSession, output: &mut W) -> AppResult<()> {
    let review = session.review();

    writeln!(output)?;
    writeln!(output, "Quiz finished!")?;
    writeln!(output, "Your final score: {} / {}", session.score(), review.len())?;
    writeln!(output)?;
    writeln!(output, "Review your answers:")?;
    for entry in review {
        writeln!(output, "Question {}: {}", entry.number, entry.question)?;
        let answer = entry.user_answer.as_deref().unwrap_or("unanswered");
        if entry.correct {
            writeln!(output, "  Your answer: {} (correct)", answer)?;
        } else {
            writeln!(output, "  Your answer: {}", answer)?;
            writeln!(output, "  Correct answer: {}", entry.correct_answer)?;
        }
    }
    Ok(())
}

fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> AppResult<bool> {
    write!(output, "{} [y/N]: ", question)?;
    output.flush()?;
    Ok(read_line(input)?
        .map(|line| matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false))
}

fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
