//! Interactive menu session.
//!
//! Generic over its input and output so it can be driven from a script in
//! tests as well as from the terminal.

use std::io::{self, BufRead, Write};

use crate::codec::{CodecError, DataFile};
use crate::models::Planet;
use crate::report;
use crate::store::PlanetStore;

const MENU: &str = "\n\nPlanet Tracker!\n\n\
1. Add Planet\n\
2. Delete Planet\n\
3. Find Planet\n\
4. List All\n\
5. Sort Planets\n\
6. Quit\n";

const NOT_FOUND: &str = "ERROR: PLANET NOT FOUND";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Find,
    List,
    Sort,
    Quit,
}

impl MenuChoice {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Delete),
            "3" => Some(Self::Find),
            "4" => Some(Self::List),
            "5" => Some(Self::Sort),
            "6" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// How a session ended.
#[derive(Debug)]
pub struct Finished {
    pub store: PlanetStore,
    /// Result of the exit save, or `None` when autosave is off.
    pub save: Option<Result<usize, CodecError>>,
}

enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    store: PlanetStore,
    data_file: DataFile,
    autosave: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, store: PlanetStore, data_file: DataFile) -> Self {
        Self {
            input,
            output,
            store,
            data_file,
            autosave: true,
        }
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Run the menu loop until Quit or end of input, then save if enabled.
    pub fn run(mut self) -> io::Result<Finished> {
        loop {
            write!(self.output, "{}Enter Choice: ", MENU)?;
            self.output.flush()?;

            let Some(choice) = self.read_choice()? else {
                break;
            };
            writeln!(self.output)?;

            if let Flow::Quit = self.dispatch(choice)? {
                break;
            }
        }

        let save = if self.autosave {
            let result = self.data_file.save(&self.store);
            match &result {
                Ok(_) => writeln!(self.output, "Data Written To File Successfully.")?,
                Err(e) => {
                    tracing::error!("{}", e);
                    writeln!(self.output, "ERROR: UNABLE TO OPEN FILE")?;
                }
            }
            Some(result)
        } else {
            None
        };
        writeln!(self.output, "Exiting Program.")?;
        self.output.flush()?;

        Ok(Finished {
            store: self.store,
            save,
        })
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        tracing::debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Delete => {
                let Some(name) = self.prompt_name("Enter Planet Name To Delete: ")? else {
                    return Ok(Flow::Quit);
                };
                if self.store.delete_by_name(&name) {
                    writeln!(self.output, "Planet {} Was Deleted Successfully.", name)?;
                } else {
                    writeln!(self.output, "{}", NOT_FOUND)?;
                }
                Ok(Flow::Continue)
            }
            MenuChoice::Find => {
                let Some(name) = self.prompt_name("Enter Planet Name To Find: ")? else {
                    return Ok(Flow::Quit);
                };
                match self.store.find_by_name(&name) {
                    Some(planet) => write!(self.output, "{}", report::planet_details(planet))?,
                    None => writeln!(self.output, "{}", NOT_FOUND)?,
                }
                Ok(Flow::Continue)
            }
            MenuChoice::List => {
                write!(self.output, "{}", report::planet_listing(&self.store))?;
                Ok(Flow::Continue)
            }
            MenuChoice::Sort => {
                self.store.sort_by_name();
                writeln!(self.output, "Planets Sorted Alphabetically.")?;
                Ok(Flow::Continue)
            }
            MenuChoice::Quit => Ok(Flow::Quit),
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt_name("Enter Planet Name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(diameter) = self.prompt_number("Enter Diameter (km): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(mass) =
            self.prompt_number("Enter Mass In Scientific Notation (kg), ex: 3.4e10: ")?
        else {
            return Ok(Flow::Quit);
        };

        self.store.insert(Planet::new(name.as_str(), diameter, mass));
        writeln!(self.output, "Planet {} Was Added Successfully.", name)?;
        Ok(Flow::Continue)
    }

    // ============================================================
    // Input helpers; `None` means end of input
    // ============================================================

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::from_input(&line) {
                return Ok(Some(choice));
            }
            write!(self.output, "\nERROR: ENTER NUMBER IN THE RANGE 1-6: ")?;
            self.output.flush()?;
        }
    }

    /// Names are a single token; the data file cannot hold embedded whitespace.
    fn prompt_name(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }

    fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.split_whitespace().next().map(str::parse::<f64>) {
                Some(Ok(value)) => return Ok(Some(value)),
                _ => {
                    write!(self.output, "ERROR: ENTER A NUMBER: ")?;
                    self.output.flush()?;
                }
            }
        }
    }
}
