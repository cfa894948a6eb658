use anyhow::{Context, Result, anyhow, bail};
use std::{fs, path::Path, str::FromStr};

use keybinds::Keybinds;
use logos::Logos;
use strum::EnumString;
use tracing::error;

use crate::{
    app::{AppMessage, AppTab},
    inventory::{DeletePrompt, InventoryMessage},
};

use super::ThemeChoice;

const DEFAULT_CONFIG: &str = include_str!("../../assets/default.conf");

#[derive(Debug, EnumString, Clone, Copy, PartialEq, Eq)]
pub enum BindableMessage {
    OneTab,
    TwoTab,
    ThreeTab,
    InventoryTab,
    AddItem,
    ToggleTheme,
    Quit,
}

impl From<BindableMessage> for AppMessage {
    fn from(value: BindableMessage) -> Self {
        match value {
            BindableMessage::OneTab => AppMessage::Tab(AppTab::One),
            BindableMessage::TwoTab => AppMessage::Tab(AppTab::Two),
            BindableMessage::ThreeTab => AppMessage::Tab(AppTab::Three),
            BindableMessage::InventoryTab => AppMessage::Tab(AppTab::Inventory),
            BindableMessage::AddItem => AppMessage::Inventory(InventoryMessage::AddButtonTapped),
            BindableMessage::ToggleTheme => AppMessage::ToggleTheme,
            BindableMessage::Quit => AppMessage::Quit,
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub keyboard: Keybinds<BindableMessage>,
    /// Key sequences in the order they were bound.
    pub bindings: Vec<(String, BindableMessage)>,
    pub theme: ThemeChoice,
    pub delete_prompt: DeletePrompt,
}

impl Config {
    pub fn new() -> Self {
        Config {
            keyboard: Keybinds::new(vec![]),
            bindings: vec![],
            theme: ThemeChoice::default(),
            delete_prompt: DeletePrompt::default(),
        }
    }

    /// Reads a user config. The file replaces the bundled defaults entirely.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        Self::from_str(&contents)
    }

    fn apply(&mut self, line: usize, name: &str, args: &[String]) -> Result<()> {
        let cmd = Command::from_str(name)
            .map_err(|_| anyhow!("line {}: unknown command `{}`", line, name))?;
        match cmd {
            Command::Bind => {
                expect_args(line, name, args, 2)?;
                let action = BindableMessage::from_str(&args[1])
                    .map_err(|_| anyhow!("line {}: unknown action `{}`", line, args[1]))?;
                self.keyboard.bind(&args[0], action).map_err(|e| {
                    anyhow!("line {}: invalid key sequence `{}`: {:?}", line, args[0], e)
                })?;
                self.bindings.push((args[0].clone(), action));
            }
            Command::Theme => {
                expect_args(line, name, args, 1)?;
                self.theme = ThemeChoice::from_str(&args[0])
                    .map_err(|_| anyhow!("line {}: unknown theme `{}`", line, args[0]))?;
            }
            Command::DeletePrompt => {
                expect_args(line, name, args, 1)?;
                self.delete_prompt = DeletePrompt::from_str(&args[0])
                    .map_err(|_| anyhow!("line {}: unknown delete prompt `{}`", line, args[0]))?;
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            error!("Bundled config is invalid: {:#}", e);
            Config::new()
        })
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = s.chars().filter(|&c| c != '\r').collect::<String>();
        let lexer = Token::lexer(&sanitized);

        let mut line = 1;
        let mut cmd_name: Option<String> = None;
        let mut args = vec![];

        let mut out = Config::new();

        for token in lexer {
            match token {
                Ok(Token::String(s)) => {
                    if cmd_name.is_none() {
                        cmd_name = Some(s);
                    } else {
                        args.push(s);
                    }
                }
                Ok(Token::StatementDelim) => {
                    if let Some(cmd) = cmd_name.take() {
                        out.apply(line, &cmd, &args)?;
                    }
                    args.clear();
                    line += 1;
                }
                Ok(Token::ArgDelim) => {}
                Err(_) => bail!("line {}: unexpected input", line),
            }
        }
        // Last statement may lack a trailing newline
        if let Some(cmd) = cmd_name.take() {
            out.apply(line, &cmd, &args)?;
        }
        Ok(out)
    }
}

fn expect_args(line: usize, name: &str, args: &[String], count: usize) -> Result<()> {
    if args.len() != count {
        bail!(
            "line {}: {} requires {} argument(s), got {}",
            line,
            name,
            count,
            args.len()
        );
    }
    Ok(())
}

/// Represents valid tokens in a configuration file.
#[derive(Debug, Logos)]
enum Token {
    #[regex("[ \t]+")]
    ArgDelim,

    #[token("\n")]
    StatementDelim,

    #[regex("[^ \t\n]+", |lex| lex.slice().to_owned())]
    String(String),
}

#[derive(Debug, EnumString)]
enum Command {
    Bind,
    Theme,
    DeletePrompt,
}
