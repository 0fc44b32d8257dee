//! Fireside main entry point
//!
//! A line-oriented reading room over the story library: browse stories and
//! chapters, add or edit chapter text, and have a chapter read aloud with an
//! adjustable voice and speed.

use fireside::session::Session;
use fireside::speech::{Player, Voice};
use fireside::store::{seed_stories, split_paragraphs, FileStorage, Library};
use fireside::{FiresideError, Result};
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to fireside.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("fireside.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open fireside.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "Fireside version {} starting (debug mode, logging to fireside.log)",
            fireside::VERSION
        );
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let storage = FileStorage::default_location();
    let mut library = Library::load_or_default(&storage);

    if library.is_empty() {
        info!("Empty library, adding the starter story");
        library = Library::from_stories(seed_stories());
        library.save(&storage)?;
    }

    // Narration is optional: if the platform engine fails to come up, the
    // library still works, playback simply does not start.
    let mut session = match Player::native() {
        Ok(player) => Some(Session::new(player)),
        Err(e) => {
            eprintln!("Speech unavailable: {}", e);
            None
        }
    };

    println!("fireside {} - type 'help' for commands", fireside::VERSION);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else { continue };
        let args: Vec<&str> = parts.collect();

        if cmd == "quit" || cmd == "exit" {
            break;
        }

        let outcome = match cmd {
            "help" => {
                print_help();
                Ok(())
            }
            "list" => cmd_list(&library),
            "chapters" => cmd_chapters(&library, &args),
            "show" => cmd_show(&library, &args),
            "add" => cmd_add(&mut lines, &mut library, &storage),
            "edit" => cmd_edit(&mut lines, &mut library, &storage, &args),
            "rmstory" => cmd_rmstory(&mut library, &storage, &args),
            "rmchapter" => cmd_rmchapter(&mut library, &storage, &args),
            "open" => cmd_open(&library, session.as_mut(), &args),
            "play" => with_session(session.as_mut(), |s| s.toggle()),
            "stop" => with_session(session.as_mut(), |s| s.stop()),
            "speed" => cmd_speed(session.as_mut(), &args),
            "voice" => cmd_voice(session.as_mut(), &args),
            other => Err(FiresideError::InvalidInput(format!("unknown command: {}", other))),
        };

        if let Err(e) = outcome {
            eprintln!("{}", e);
        }
    }

    if let Some(session) = session.as_mut() {
        session.close()?;
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  list                      list stories");
    println!("  chapters <story>          list a story's chapters");
    println!("  show <story> <chapter>    print a chapter's paragraphs");
    println!("  add                       add a chapter (creates the story if new)");
    println!("  edit <story> <chapter>    replace a chapter's title and text");
    println!("  rmstory <story>           delete a story");
    println!("  rmchapter <story> <chapter>  delete a chapter");
    println!("  open <story> <chapter>    open a chapter for reading");
    println!("  play                      start/stop reading the open chapter");
    println!("  stop                      stop reading");
    println!("  speed <0.5-2.0>           set the reading speed");
    println!("  voice <zh|en>             set the reading voice");
    println!("  quit                      exit");
}

/// Parse a 1-based index argument into a 0-based index
fn parse_index(args: &[&str], pos: usize, what: &str) -> Result<usize> {
    let raw = args
        .get(pos)
        .ok_or_else(|| FiresideError::InvalidInput(format!("missing {} number", what)))?;
    let n: usize = raw
        .parse()
        .map_err(|_| FiresideError::InvalidInput(format!("not a {} number: {}", what, raw)))?;
    if n == 0 {
        return Err(FiresideError::InvalidInput(format!("{} numbers start at 1", what)));
    }
    Ok(n - 1)
}

/// Read one line, prompting first
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(FiresideError::InvalidInput("unexpected end of input".into())),
    }
}

/// Read chapter text until a line containing only "."
fn read_text(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    println!("Enter paragraphs, one per line; finish with a single '.'");
    let mut text = String::new();
    loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if line.trim() == "." {
                    return Ok(text);
                }
                text.push_str(&line);
                text.push('\n');
            }
            None => return Ok(text),
        }
    }
}

fn cmd_list(library: &Library) -> Result<()> {
    if library.is_empty() {
        println!("No stories yet.");
        return Ok(());
    }
    for (i, story) in library.stories().iter().enumerate() {
        println!("{}. {} ({} chapters)", i + 1, story.title, story.chapters.len());
    }
    Ok(())
}

fn cmd_chapters(library: &Library, args: &[&str]) -> Result<()> {
    let index = parse_index(args, 0, "story")?;
    let story = library
        .stories()
        .get(index)
        .ok_or(FiresideError::IndexOutOfBounds(index))?;
    println!("{}", story.title);
    for (i, chapter) in story.chapters.iter().enumerate() {
        println!("  {}. {}", i + 1, chapter.title);
    }
    Ok(())
}

fn cmd_show(library: &Library, args: &[&str]) -> Result<()> {
    let story_index = parse_index(args, 0, "story")?;
    let chapter_index = parse_index(args, 1, "chapter")?;
    let story = library
        .stories()
        .get(story_index)
        .ok_or(FiresideError::IndexOutOfBounds(story_index))?;
    let chapter = story
        .chapters
        .get(chapter_index)
        .ok_or(FiresideError::IndexOutOfBounds(chapter_index))?;
    println!("{}", chapter.title);
    for paragraph in &chapter.paragraphs {
        println!("  {}", paragraph);
    }
    Ok(())
}

fn cmd_add(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    library: &mut Library,
    storage: &FileStorage,
) -> Result<()> {
    let story_title = read_line(lines, "Story title: ")?;
    let chapter_title = read_line(lines, "Chapter title: ")?;
    let text = read_text(lines)?;

    library.append_or_create_chapter(&story_title, &chapter_title, split_paragraphs(&text))?;
    library.save(storage)?;
    println!("Saved.");
    Ok(())
}

fn cmd_edit(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    library: &mut Library,
    storage: &FileStorage,
    args: &[&str],
) -> Result<()> {
    let story_index = parse_index(args, 0, "story")?;
    let chapter_index = parse_index(args, 1, "chapter")?;
    let (story_title, chapter_title) = {
        let story = library
            .stories()
            .get(story_index)
            .ok_or(FiresideError::IndexOutOfBounds(story_index))?;
        let chapter = story
            .chapters
            .get(chapter_index)
            .ok_or(FiresideError::IndexOutOfBounds(chapter_index))?;
        (story.title.clone(), chapter.title.clone())
    };

    let new_title = read_line(lines, "New chapter title (blank keeps current): ")?;
    let new_title = if new_title.is_empty() { chapter_title.clone() } else { new_title };
    let text = read_text(lines)?;

    library.replace_chapter(&story_title, &chapter_title, &new_title, split_paragraphs(&text))?;
    library.save(storage)?;
    println!("Saved.");
    Ok(())
}

fn cmd_rmstory(library: &mut Library, storage: &FileStorage, args: &[&str]) -> Result<()> {
    let index = parse_index(args, 0, "story")?;
    let story = library.delete_story(index)?;
    library.save(storage)?;
    println!("Deleted \"{}\".", story.title);
    Ok(())
}

fn cmd_rmchapter(library: &mut Library, storage: &FileStorage, args: &[&str]) -> Result<()> {
    let story_index = parse_index(args, 0, "story")?;
    let chapter_index = parse_index(args, 1, "chapter")?;
    let story_id = library
        .stories()
        .get(story_index)
        .ok_or(FiresideError::IndexOutOfBounds(story_index))?
        .id;
    let chapter = library.delete_chapter(story_id, chapter_index)?;
    library.save(storage)?;
    println!("Deleted \"{}\".", chapter.title);
    Ok(())
}

fn cmd_open(library: &Library, session: Option<&mut Session>, args: &[&str]) -> Result<()> {
    let story_index = parse_index(args, 0, "story")?;
    let chapter_index = parse_index(args, 1, "chapter")?;
    let story = library
        .stories()
        .get(story_index)
        .ok_or(FiresideError::IndexOutOfBounds(story_index))?;
    let chapter = story
        .chapters
        .get(chapter_index)
        .ok_or(FiresideError::IndexOutOfBounds(chapter_index))?;

    with_session(session, |s| {
        s.open_chapter(chapter)?;
        println!("Opened \"{}\". Type 'play' to read it aloud.", chapter.title);
        Ok(())
    })
}

fn cmd_speed(session: Option<&mut Session>, args: &[&str]) -> Result<()> {
    let raw = args
        .first()
        .ok_or_else(|| FiresideError::InvalidInput("missing speed value".into()))?;
    let display: f32 = raw
        .parse()
        .map_err(|_| FiresideError::InvalidInput(format!("not a speed: {}", raw)))?;
    with_session(session, |s| {
        s.set_speed(display)?;
        println!("Speed set to {:.2}x.", s.settings().speed_display);
        Ok(())
    })
}

fn cmd_voice(session: Option<&mut Session>, args: &[&str]) -> Result<()> {
    let raw = args
        .first()
        .ok_or_else(|| FiresideError::InvalidInput("missing voice (zh or en)".into()))?;
    let voice: Voice = raw.parse()?;
    with_session(session, |s| {
        s.set_voice(voice)?;
        println!("Voice set to {}.", voice.locale());
        Ok(())
    })
}

/// Run a playback action if the speech engine came up
fn with_session<F>(session: Option<&mut Session>, f: F) -> Result<()>
where
    F: FnOnce(&mut Session) -> Result<()>,
{
    match session {
        Some(session) => f(session),
        None => Err(FiresideError::Speech("speech engine not available".into())),
    }
}
