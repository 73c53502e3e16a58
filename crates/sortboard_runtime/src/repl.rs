//! The interactive board REPL.

use std::thread;

use sortboard_engine::{Algorithm, DEFAULT_COUNT};
use sortboard_foundation::{Error, ErrorKind, Result, SequenceFormat};

use crate::config::DelayConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::{RunView, TextRenderer};
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (board, algorithm, pacing).
    session: Session,

    /// Renderer for boards and step log lines.
    renderer: TextRenderer,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            renderer: TextRenderer::new(),
            show_banner: true,
            prompt: "sort> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            Self::print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);
                    match self.eval_line(trimmed) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => Self::print_error(&e),
                    }
                }
                ReadResult::Interrupted => {
                    println!("^C");
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one command line.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn eval_line(&mut self, line: &str) -> Result<bool> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };

        match command {
            "help" => Self::print_help(),
            "show" => self.show_board(),
            "set" => {
                self.session.set_text(rest)?;
                self.show_board();
            }
            "gen" => {
                let (count, format) = Self::parse_gen_args(rest)?;
                self.session.generate_board(count, format)?;
                self.show_board();
            }
            "shuffle" => {
                self.session.shuffle_board()?;
                self.show_board();
            }
            "algo" => {
                if rest.is_empty() {
                    println!("algorithm: {}", self.session.algorithm());
                } else {
                    self.session.set_algorithm(rest.parse()?)?;
                    println!("algorithm: {}", self.session.algorithm());
                }
            }
            "info" => println!("{}", self.session.algorithm().description()),
            "delay" => {
                if !rest.is_empty() {
                    self.session.set_delay(DelayConfig::from_input(rest));
                }
                println!("delay: {}ms", self.session.delay().millis());
            }
            "sort" => self.animate()?,
            "save" => {
                self.session.save(rest)?;
                println!("saved board to {rest}");
            }
            "load" => {
                self.session.load(rest)?;
                self.show_board();
            }
            "quit" | "exit" => return Ok(false),
            other => {
                println!("unknown command: {other} (try `help`)");
            }
        }
        Ok(true)
    }

    /// Runs the selected algorithm, animating one step at a time.
    ///
    /// The session locks board mutations for the whole run; pacing comes
    /// from the session's delay config, re-read between steps so `delay`
    /// changes apply to a run already on screen.
    fn animate(&mut self) -> Result<()> {
        self.session.start()?;
        let mut view = RunView::new(self.session.sequence().len());

        while let Some(step) = self.session.step()? {
            view.apply(&step);
            println!("{}", self.renderer.log_line(&step, self.session.sequence()));
            if step.is_mutation() || step.is_marker() {
                print!("{}", self.renderer.render(self.session.sequence(), &view));
            }
            thread::sleep(self.session.delay().duration());
        }

        println!("final board: {}", self.session.text());
        Ok(())
    }

    fn show_board(&self) {
        let seq = self.session.sequence();
        if seq.is_empty() {
            println!("(empty board; try `gen` or `set 5,3,8,1`)");
            return;
        }
        print!("{}", self.renderer.render(seq, &RunView::new(seq.len())));
        println!("text: {}", self.session.text());
        println!(
            "algorithm: {}  delay: {}ms",
            self.session.algorithm(),
            self.session.delay().millis()
        );
    }

    /// Parses `gen` arguments: an optional count and an optional
    /// `labeled` flag, in either order.
    fn parse_gen_args(rest: &str) -> Result<(usize, SequenceFormat)> {
        let mut count = DEFAULT_COUNT;
        let mut format = SequenceFormat::Bare;

        for arg in rest.split_whitespace() {
            if arg.eq_ignore_ascii_case("labeled") {
                format = SequenceFormat::Labeled;
            } else {
                count = arg
                    .parse()
                    .map_err(|_| Error::new(ErrorKind::Internal(format!("invalid count: {arg}"))))?;
            }
        }
        Ok((count, format))
    }

    fn print_banner() {
        println!("Sortboard - sorting algorithm visualizer");
        println!("Algorithms: {}", algorithm_names().join(", "));
        println!("Type `help` for commands, `gen` for a random board.\n");
    }

    fn print_error(error: &Error) {
        eprintln!("\x1b[31merror: {error}\x1b[0m");
    }

    fn print_help() {
        println!(
            "Commands:
    show                 Display the board
    set <csv>            Set the board from text (e.g. 5,3,8,1 or ava:5,ben:3)
    gen [count] [labeled] Generate a random board (default {DEFAULT_COUNT} elements)
    shuffle              Shuffle the board
    algo [name]          Show or select the algorithm ({names})
    info                 Describe the selected algorithm
    delay [ms]           Show or set the step delay
    sort                 Run the selected algorithm, animated
    save <path>          Save the board snapshot
    load <path>          Load a board snapshot
    help                 Show this help
    quit                 Exit",
            names = algorithm_names().join(", "),
        );
    }
}

fn algorithm_names() -> Vec<&'static str> {
    Algorithm::ALL.iter().map(|a| a.name()).collect()
}
