//! Console command parsing

use std::path::PathBuf;

/// One line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(String),
    /// Filter for the active tab
    Filter(String),
    List,
    Counts,
    /// Details for one item on the active tab
    Show(String),
    /// Follow a notification's related entity
    Goto(String),
    Start(String),
    Complete(String),
    RoomStatus { room: String, status: String },
    /// Advance housekeeping ("Start Cleaning" / "Mark Clean")
    Clean(String),
    Issue { room: String, text: String },
    Resolve(String),
    Read(String),
    ReadAll,
    Action { name: String, confirmed: bool },
    Save(PathBuf),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  tab <tasks|rooms|notifications>   switch tab
  filter <name>                     filter the active tab
  list | counts                     redraw list / header counters
  show <id>                         details for an item on the active tab
  goto <notification>               open the notification's linked item
  start <task> | complete <task>    move a task forward
  room <room> <status>              set room status
  clean <room>                      advance housekeeping
  issue <room> <text> | resolve <room>
  read <notification> | read-all
  action <name> [confirm]           quick action
  save <path>                       write a JSON snapshot
  help | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let arg = |what: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("{verb}: missing {what}"))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb {
            "tab" => Ok(Command::Tab(arg("tab")?)),
            "filter" => Ok(Command::Filter(arg("filter name")?)),
            "list" | "ls" => Ok(Command::List),
            "counts" => Ok(Command::Counts),
            "show" | "view" => Ok(Command::Show(arg("id")?)),
            "goto" => Ok(Command::Goto(arg("notification id")?)),
            "start" => Ok(Command::Start(arg("task id")?)),
            "complete" | "done" => Ok(Command::Complete(arg("task id")?)),
            "room" => {
                let (room, status) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "room: usage is `room <room> <status>`".to_string())?;
                Ok(Command::RoomStatus {
                    room: room.to_string(),
                    status: status.trim().to_string(),
                })
            }
            "clean" => Ok(Command::Clean(arg("room id")?)),
            "issue" => {
                let (room, text) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "issue: usage is `issue <room> <text>`".to_string())?;
                Ok(Command::Issue {
                    room: room.to_string(),
                    text: text.trim().to_string(),
                })
            }
            "resolve" => Ok(Command::Resolve(arg("room id")?)),
            "read" => Ok(Command::Read(arg("notification id")?)),
            "read-all" => Ok(Command::ReadAll),
            "action" => {
                let raw = arg("action name")?;
                let mut words = raw.split_whitespace();
                let name = words.next().unwrap_or_default().to_string();
                let confirmed = matches!(words.next(), Some("confirm" | "yes" | "y"));
                Ok(Command::Action { name, confirmed })
            }
            "save" => Ok(Command::Save(PathBuf::from(arg("path")?))),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}
