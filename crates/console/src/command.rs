//! Line-oriented command protocol for the terminal listener.
//!
//! One command token plus a fixed arity of typed arguments per line. A
//! parse failure discards the line and touches nothing; a successfully
//! executed command (read-only ones included) is followed by the
//! record-and-persist cycle, where the history stack's de-duplication
//! keeps no-op commands free.

use std::str::SplitWhitespace;

use crate::error::CommandError;
use crate::state::EditorState;

/// ANSI clear-screen sequence emitted by `clear_terminal`
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[1;1H";

/// A parsed user command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { shape: String, position: [f32; 3] },
    Move { index: usize, delta: [f32; 3] },
    Delete { index: usize },
    Rotate { index: usize, angle: f32 },
    Scale { index: usize, scale: [f32; 3] },
    UniformScale { index: usize, factor: f32 },
    Color { index: usize, name: String },
    Background { name: String },
    ClearCanvas,
    Undo,
    List,
    Help,
    Load,
    Quit,
    ClearTerminal,
}

impl Command {
    /// Parse one input line. Shape and color arguments stay strings here;
    /// vocabulary checks happen at execution so they report as
    /// `UnknownShape`/`UnknownColor` rather than `InvalidCommand`.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut tokens = line.split_whitespace();
        let head = tokens
            .next()
            .ok_or_else(|| invalid("empty command line"))?;

        let cmd = match head {
            "add" => Command::Add {
                shape: word(&mut tokens, "shape")?,
                position: vec3(&mut tokens)?,
            },
            "move" => Command::Move {
                index: index(&mut tokens)?,
                delta: vec3(&mut tokens)?,
            },
            "delete" => Command::Delete {
                index: index(&mut tokens)?,
            },
            "rotate" => Command::Rotate {
                index: index(&mut tokens)?,
                angle: float(&mut tokens, "angle")?,
            },
            "scale" => Command::Scale {
                index: index(&mut tokens)?,
                scale: vec3(&mut tokens)?,
            },
            "uscale" => Command::UniformScale {
                index: index(&mut tokens)?,
                factor: float(&mut tokens, "scale factor")?,
            },
            "color" => Command::Color {
                index: index(&mut tokens)?,
                name: word(&mut tokens, "color name")?,
            },
            "background" => Command::Background {
                name: word(&mut tokens, "color name")?,
            },
            "clear_canvas" => Command::ClearCanvas,
            "undo" => Command::Undo,
            "list" => Command::List,
            "help" => Command::Help,
            "load" => Command::Load,
            "quit" => Command::Quit,
            "clear_terminal" => Command::ClearTerminal,
            other => return Err(invalid(format!("unknown command '{other}'"))),
        };

        if tokens.next().is_some() {
            return Err(invalid(format!("too many arguments for '{head}'")));
        }
        Ok(cmd)
    }
}

/// What one executed command hands back to the listener
#[derive(Debug, Default, PartialEq)]
pub struct CommandOutcome {
    /// Text to show the user, if any
    pub message: Option<String>,
    /// Stop flag requested
    pub quit: bool,
}

impl CommandOutcome {
    fn none() -> Self {
        Self::default()
    }

    fn text(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            quit: false,
        }
    }
}

/// Execute a parsed command. Exactly one store mutation per mutating
/// command; failures leave the store untouched.
pub fn execute(state: &mut EditorState, cmd: Command) -> Result<CommandOutcome, CommandError> {
    match cmd {
        Command::Add { shape, position } => {
            state.scene.add(&shape, position)?;
            Ok(CommandOutcome::none())
        }
        Command::Move { index, delta } => {
            state.scene.translate(index, delta)?;
            Ok(CommandOutcome::none())
        }
        Command::Delete { index } => {
            state.scene.delete(index)?;
            Ok(CommandOutcome::none())
        }
        Command::Rotate { index, angle } => {
            state.scene.rotate(index, angle)?;
            Ok(CommandOutcome::none())
        }
        Command::Scale { index, scale } => {
            state.scene.scale(index, scale)?;
            Ok(CommandOutcome::none())
        }
        Command::UniformScale { index, factor } => {
            state.scene.scale_uniform(index, factor)?;
            Ok(CommandOutcome::none())
        }
        Command::Color { index, name } => {
            state.scene.recolor(index, &name)?;
            Ok(CommandOutcome::text(format!(
                "Assigned color '{name}' to object {index}"
            )))
        }
        Command::Background { name } => {
            state.scene.set_background(&name);
            Ok(CommandOutcome::none())
        }
        Command::ClearCanvas => {
            state.scene.clear();
            Ok(CommandOutcome::none())
        }
        Command::Undo => {
            state.scene.undo()?;
            Ok(CommandOutcome::none())
        }
        Command::List => Ok(CommandOutcome::text(list_text(state))),
        Command::Help => Ok(CommandOutcome::text(help_text())),
        Command::Load => match &state.save_path {
            Some(path) => {
                let path = path.clone();
                if state.scene.load_from(&path)? {
                    Ok(CommandOutcome::text(format!(
                        "Loaded scene from {}",
                        path.display()
                    )))
                } else {
                    Ok(CommandOutcome::text("No save file found, loading default"))
                }
            }
            None => Ok(CommandOutcome::text("No save file configured")),
        },
        Command::Quit => Ok(CommandOutcome {
            message: None,
            quit: true,
        }),
        Command::ClearTerminal => Ok(CommandOutcome::text(CLEAR_SEQUENCE)),
    }
}

/// Full cycle for one input line: parse, execute, then record the new
/// state and persist it. The cycle runs only after an accepted command;
/// a failed line leaves store, history, and disk untouched.
pub fn run_line(state: &mut EditorState, line: &str) -> Result<CommandOutcome, CommandError> {
    let cmd = Command::parse(line)?;
    let outcome = execute(state, cmd)?;

    state.scene.record();
    if let Some(path) = state.save_path.clone() {
        if let Err(e) = state.scene.save_to(&path) {
            // Memory and disk may diverge here; keep running regardless.
            tracing::warn!("autosave failed: {e}");
        }
    }
    Ok(outcome)
}

fn list_text(state: &EditorState) -> String {
    if state.scene.is_empty() {
        return "No objects in the scene.".to_string();
    }
    let mut out = String::from("Objects in the scene:");
    for (i, obj) in state.scene.scene.objects.iter().enumerate() {
        out.push_str(&format!(
            "\n{i}: Shape: {}, Position: ({}, {}, {}), Scale: ({}, {}, {}), Angle: {}, Color: {}",
            obj.shape,
            obj.position[0],
            obj.position[1],
            obj.position[2],
            obj.scale[0],
            obj.scale[1],
            obj.scale[2],
            obj.angle,
            obj.color,
        ));
    }
    out
}

fn help_text() -> String {
    "Available commands:\n\
     \x20 add <shape> <x> <y> <z>      - Add a new object to the scene\n\
     \x20 move <index> <dx> <dy> <dz>  - Move an object by a delta\n\
     \x20 scale <index> <sx> <sy> <sz> - Scale an object\n\
     \x20 uscale <index> <factor>      - Scale an object uniformly\n\
     \x20 rotate <index> <angle>       - Set an object's rotation angle\n\
     \x20 delete <index>               - Delete an object by its index\n\
     \x20 color <index> <color_name>   - Change the color of an object\n\
     \x20 background <color_name>      - Change the background color\n\
     \x20 clear_canvas                 - Remove all objects\n\
     \x20 clear_terminal               - Clear the terminal\n\
     \x20 undo                         - Undo the last change\n\
     \x20 load                         - Reload the scene from the save file\n\
     \x20 list                         - List all objects in the scene\n\
     \x20 help                         - Show this message\n\
     \x20 quit                         - Exit the program"
        .to_string()
}

fn invalid(reason: impl Into<String>) -> CommandError {
    CommandError::InvalidCommand(reason.into())
}

fn word(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<String, CommandError> {
    tokens
        .next()
        .map(str::to_string)
        .ok_or_else(|| invalid(format!("missing {what}")))
}

fn index(tokens: &mut SplitWhitespace<'_>) -> Result<usize, CommandError> {
    let token = tokens.next().ok_or_else(|| invalid("missing index"))?;
    token
        .parse::<usize>()
        .map_err(|_| invalid(format!("'{token}' is not a valid index")))
}

fn float(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<f32, CommandError> {
    let token = tokens
        .next()
        .ok_or_else(|| invalid(format!("missing {what}")))?;
    token
        .parse::<f32>()
        .map_err(|_| invalid(format!("'{token}' is not a number")))
}

fn vec3(tokens: &mut SplitWhitespace<'_>) -> Result<[f32; 3], CommandError> {
    Ok([
        float(tokens, "x component")?,
        float(tokens, "y component")?,
        float(tokens, "z component")?,
    ])
}
