#![forbid(unsafe_code)]

//! Application model, command language, and event loop.
//!
//! Model/update/view in miniature: the model is the registry plus the
//! order book plus a handful of view fields; update is [`App::apply`]
//! (one typed command in, one state change, one status line out); view is
//! [`App::render_lines`], a pure function of the current model. The loop
//! in [`run`] redraws everything after every event, so the map, listing,
//! and chain edges can never go stale.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use tracing::{debug, info};

use mesa_core::{Discipline, Order, OrderBook, TableRegistry};
use mesa_floor::{FloorPainter, chain, layout};

use crate::cli::Opts;
use crate::session::TerminalGuard;

/// Capacities of the five demo tables seeded at startup.
const SEED_CAPACITIES: [i32; 5] = [2, 4, 6, 4, 2];

const HELP_STATUS: &str =
    "add <cap> | rm <id> | seat <id> <name> | free <id> | details <id> | clear | chain | disc <d> | order <item> <qty> <price> | pop | quit";

/// A parsed prompt command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a table with the given capacity.
    Add(i32),
    /// Remove a table by id.
    Remove(u32),
    /// Seat a party at a table.
    Seat(u32, String),
    /// Free a table.
    Free(u32),
    /// Show one table's record in the status line.
    Details(u32),
    /// Remove every table and reset the id counter.
    Clear,
    /// Toggle chain mode.
    ToggleChain,
    /// Switch the order book discipline.
    Discipline(Discipline),
    /// Add a kitchen order.
    AddOrder(Order),
    /// Remove one order from the active store.
    PopOrder,
    /// Show the command list.
    Help,
    /// Exit the demo.
    Quit,
}

impl Command {
    /// Parse one prompt line. The caller filters out blank input.
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or_else(|| "empty command".to_string())?;
        let rest: Vec<&str> = words.collect();

        match head {
            "add" => Ok(Command::Add(parse_num(&rest, 0, "capacity")?)),
            "rm" | "remove" => Ok(Command::Remove(parse_num(&rest, 0, "id")?)),
            "seat" => {
                let id = parse_num(&rest, 0, "id")?;
                if rest.len() < 2 {
                    return Err("usage: seat <id> <name>".to_string());
                }
                Ok(Command::Seat(id, rest[1..].join(" ")))
            }
            "free" => Ok(Command::Free(parse_num(&rest, 0, "id")?)),
            "details" => Ok(Command::Details(parse_num(&rest, 0, "id")?)),
            "clear" => Ok(Command::Clear),
            "chain" => Ok(Command::ToggleChain),
            "disc" => {
                let name = rest.first().ok_or("usage: disc <list|stack|queue|linked>")?;
                Discipline::parse(name)
                    .map(Command::Discipline)
                    .ok_or_else(|| format!("unknown discipline: {name} (list|stack|queue|linked)"))
            }
            "order" => {
                if rest.len() != 3 {
                    return Err("usage: order <item> <qty> <price>".to_string());
                }
                let qty: u32 = parse_num(&rest, 1, "quantity")?;
                let cents = parse_price(rest[2])
                    .ok_or_else(|| format!("invalid price: {}", rest[2]))?;
                Ok(Command::AddOrder(Order::new(rest[0], qty, cents)))
            }
            "pop" => Ok(Command::PopOrder),
            "help" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }
}

fn parse_num<T: std::str::FromStr>(rest: &[&str], idx: usize, what: &str) -> Result<T, String> {
    let tok = rest.get(idx).ok_or_else(|| format!("missing {what}"))?;
    tok.parse().map_err(|_| format!("invalid {what}: {tok}"))
}

/// Parse a price like `4.50`, `4.5`, or `4` into cents.
fn parse_price(s: &str) -> Option<u32> {
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if frac.len() > 2 {
        return None;
    }
    let whole: u32 = whole.parse().ok()?;
    let cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<u32>().ok()? * 10,
        _ => frac.parse::<u32>().ok()?,
    };
    whole.checked_mul(100)?.checked_add(cents)
}

/// The demo's entire mutable state.
#[derive(Debug, Default)]
pub struct App {
    registry: TableRegistry,
    orders: OrderBook,
    chained: bool,
    input: String,
    status: String,
    quit: bool,
}

impl App {
    /// Create the app, optionally seeded with the five demo tables.
    pub fn new(seed: bool) -> Self {
        let mut registry = TableRegistry::new();
        if seed {
            for cap in SEED_CAPACITIES {
                // Seed capacities are positive constants.
                let _ = registry.create(cap);
            }
        }
        Self {
            registry,
            orders: OrderBook::new(),
            chained: true,
            status: "ready — type 'help' for commands".to_string(),
            ..Self::default()
        }
    }

    /// Whether the loop should exit.
    #[inline]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Feed one key event into the model.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                if !line.trim().is_empty() {
                    self.apply(&line);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    /// Parse and execute one prompt line, updating the status line.
    pub fn apply(&mut self, line: &str) {
        debug!(line, "command entered");
        match Command::parse(line) {
            Ok(cmd) => self.execute(cmd),
            Err(msg) => self.status = msg,
        }
    }

    fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::Add(cap) => match self.registry.create(cap) {
                Ok(t) => {
                    info!(id = t.id, cap, "table added");
                    self.status = format!("table {} added ({} seats)", t.id, t.capacity);
                }
                Err(e) => self.status = e.to_string(),
            },
            Command::Remove(id) => {
                self.status = if self.registry.remove(id) {
                    info!(id, "table removed");
                    format!("table {id} removed")
                } else {
                    format!("table {id} not found")
                };
            }
            Command::Seat(id, party) => {
                self.status = match self.registry.seat(id, &party) {
                    Ok(()) => format!("table {id} seated: {}", party.trim()),
                    Err(e) => e.to_string(),
                };
            }
            Command::Free(id) => {
                self.status = match self.registry.vacate(id) {
                    Ok(()) => format!("table {id} freed"),
                    Err(e) => e.to_string(),
                };
            }
            Command::Details(id) => {
                self.status = match self.registry.find(id) {
                    Some(t) => format!(
                        "table {}: capacity {}, {}",
                        t.id,
                        t.capacity,
                        if t.occupied {
                            format!("seated by {}", t.party)
                        } else {
                            "free".to_string()
                        }
                    ),
                    None => format!("table {id} not found"),
                };
            }
            Command::Clear => {
                self.registry.clear();
                self.status = "all tables removed".to_string();
            }
            Command::ToggleChain => {
                self.chained = !self.chained;
                self.status = format!(
                    "chain mode {}",
                    if self.chained { "on" } else { "off" }
                );
            }
            Command::Discipline(d) => {
                self.orders.set_discipline(d);
                self.status = format!("order discipline: {}", d.name());
            }
            Command::AddOrder(order) => {
                self.status = format!("order added: {} x{}", order.item, order.quantity);
                self.orders.add(order);
            }
            Command::PopOrder => {
                self.status = match self.orders.remove_one() {
                    Some(o) => format!("order removed: {} x{}", o.item, o.quantity),
                    None => "no orders to remove".to_string(),
                };
            }
            Command::Help => self.status = HELP_STATUS.to_string(),
            Command::Quit => self.quit = true,
        }
    }

    /// Render the whole screen as lines, cropped to `width` characters.
    pub fn render_lines(&self, width: usize) -> Vec<String> {
        let tables = self.registry.tables();
        let positions = layout::positions(tables.len());
        let edges = chain::edges(&positions, self.chained);

        let mut painter = FloorPainter::for_floor(tables.len());
        for (table, at) in tables.iter().zip(&positions) {
            painter.draw_table(table, *at);
        }
        for edge in &edges {
            painter.draw_edge(edge);
        }

        let mut lines = Vec::new();
        lines.push(format!(
            "mesa — floor manager   mode: {}   tables: {} ({} occupied)",
            if self.chained { "chained" } else { "flat" },
            tables.len(),
            self.registry.occupied_count(),
        ));
        lines.push(format!("status: {}", self.status));
        lines.push(format!("> {}", self.input));
        lines.push(String::new());

        lines.push(format!("{:>4}  {:>4}  {:<8}  party", "id", "cap", "state"));
        for t in tables {
            lines.push(format!(
                "{:>4}  {:>4}  {:<8}  {}",
                t.id,
                t.capacity,
                if t.occupied { "seated" } else { "free" },
                t.party,
            ));
        }
        lines.push(String::new());

        let items: Vec<String> = self
            .orders
            .orders()
            .iter()
            .map(|o| format!("{} x{}", o.item, o.quantity))
            .collect();
        lines.push(format!(
            "orders [{}] ({}): {}",
            self.orders.discipline().name(),
            items.len(),
            items.join(", "),
        ));
        lines.push(String::new());

        lines.extend(painter.lines());

        for line in &mut lines {
            if line.chars().count() > width {
                *line = line.chars().take(width).collect();
            }
        }
        lines
    }
}

/// Run the interactive loop until the operator quits.
pub fn run(opts: &Opts) -> io::Result<()> {
    let _guard = TerminalGuard::enter(opts.alt_screen)?;
    let mut app = App::new(opts.seed);
    let mut out = io::stdout();

    while !app.should_quit() {
        let (width, height) = terminal::size()?;
        for (row, line) in app
            .render_lines(width as usize)
            .into_iter()
            .take(height as usize)
            .enumerate()
        {
            queue!(
                out,
                MoveTo(0, row as u16),
                Print(line),
                Clear(ClearType::UntilNewLine)
            )?;
        }
        queue!(out, Clear(ClearType::FromCursorDown))?;
        out.flush()?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize(..) => {}
            _ => {}
        }
    }
    Ok(())
}
