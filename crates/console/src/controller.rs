//! Interactive menu loop.
//!
//! ```text
//! MenuDisplay -> AwaitChoice -> Flow(choice) -> Pause -> MenuDisplay
//!                     |
//!                     +-- 7 --> Exit
//! ```
//!
//! Every flow failure except a broken console is reported and the loop
//! carries on. End of input ends the session like choice 7.

use std::io::{BufRead, Write};

use stockroom_core::{DomainError, Price, Quantity};
use stockroom_inventory::{InventoryRecord, InventoryStore};
use stockroom_persistence::{PersistenceError, PersistenceGateway};

use crate::error::{ConsoleError, ConsoleResult};
use crate::input::{Prompter, parse_number};
use crate::menu::{MENU, MenuChoice};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControllerState {
    MenuDisplay,
    AwaitChoice,
    Flow(MenuChoice),
    Pause,
    Exit,
}

/// Owns the session's store and drives the menu over `input`/`output`.
pub struct ConsoleController<R, W> {
    store: InventoryStore,
    gateway: PersistenceGateway,
    io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    pub fn new(input: R, output: W, gateway: PersistenceGateway) -> Self {
        Self {
            store: InventoryStore::new(),
            gateway,
            io: Prompter::new(input, output),
        }
    }

    /// Start the session with an existing store instead of an empty one.
    pub fn with_store(mut self, store: InventoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Run until choice 7 or end of input.
    ///
    /// Only a failing console (`ConsoleError::Io`) is returned.
    pub fn run(&mut self) -> ConsoleResult<()> {
        let mut state = ControllerState::MenuDisplay;
        while state != ControllerState::Exit {
            state = match self.step(state) {
                Ok(next) => next,
                Err(ConsoleError::InputClosed) => {
                    tracing::info!("input closed, ending session");
                    ControllerState::Exit
                }
                Err(ConsoleError::Io(err)) => return Err(ConsoleError::Io(err)),
                Err(err) => {
                    tracing::error!(error = %err, ?state, "flow failed");
                    self.io.say(format!("An error occurred: {err}"))?;
                    ControllerState::Pause
                }
            };
        }
        Ok(())
    }

    /// Execute one state and return the next.
    pub fn step(&mut self, state: ControllerState) -> ConsoleResult<ControllerState> {
        match state {
            ControllerState::MenuDisplay => {
                self.io.say(MENU)?;
                Ok(ControllerState::AwaitChoice)
            }
            ControllerState::AwaitChoice => {
                let number = self.io.parse_until("Enter your choice: ", parse_number)?;
                match MenuChoice::from_number(number) {
                    Some(MenuChoice::Exit) => {
                        self.io.say("Exiting the program...")?;
                        Ok(ControllerState::Exit)
                    }
                    Some(choice) => {
                        tracing::debug!(?choice, "menu choice");
                        Ok(ControllerState::Flow(choice))
                    }
                    None => {
                        self.io.say("Invalid choice. Please try again.")?;
                        Ok(ControllerState::Pause)
                    }
                }
            }
            ControllerState::Flow(choice) => {
                match choice {
                    MenuChoice::Add => self.add_flow()?,
                    MenuChoice::Delete => self.delete_flow()?,
                    MenuChoice::Update => self.update_flow()?,
                    MenuChoice::List => self.list_flow()?,
                    MenuChoice::Save => self.save_flow()?,
                    MenuChoice::Load => self.load_flow()?,
                    MenuChoice::Exit => return Ok(ControllerState::Exit),
                }
                Ok(ControllerState::Pause)
            }
            ControllerState::Pause => {
                self.io.line("\nPress Enter to continue...\n")?;
                Ok(ControllerState::MenuDisplay)
            }
            ControllerState::Exit => Ok(ControllerState::Exit),
        }
    }

    fn add_flow(&mut self) -> ConsoleResult<()> {
        self.io.say("\n--- Add New Inventory Item ---")?;
        let name = self.io.non_empty("Enter item name: ", "Item name")?;

        let code = loop {
            let code = self.io.non_empty("Enter item code: ", "Item code")?;
            if !self.store.contains_code(&code) {
                break code;
            }
            self.io
                .say("An item with this code already exists. Please use a different code.")?;
        };

        let quantity = self.io.parse_until("Enter quantity: ", Quantity::parse)?;
        let price = self.io.parse_until("Enter price: $", Price::parse)?;

        self.store
            .add(InventoryRecord::new(name, code, quantity.get(), price.get()))?;
        self.io.say("Inventory item added successfully!")
    }

    fn delete_flow(&mut self) -> ConsoleResult<()> {
        if self.store.is_empty() {
            return self.io.say("No items to delete.");
        }

        self.io.say("\n--- Delete Inventory Item ---")?;
        let code = self.io.line("Enter item code to delete: ")?;
        match self.store.remove_by_code(&code) {
            Ok(_) => self.io.say("Item deleted successfully!"),
            Err(DomainError::NotFound(_)) => self.io.say("No item found with that code."),
            Err(err) => Err(err.into()),
        }
    }

    fn update_flow(&mut self) -> ConsoleResult<()> {
        if self.store.is_empty() {
            return self.io.say("No items to update.");
        }

        self.io.say("\n--- Update Item Quantity ---")?;
        let code = self.io.line("Enter item code to update: ")?;
        let current = match self.store.find_by_code(&code) {
            Ok(record) => record.formatted(),
            Err(DomainError::NotFound(_)) => return self.io.say("No item found with that code."),
            Err(err) => return Err(err.into()),
        };

        self.io.say(format!("Current item: {current}"))?;
        let quantity = self.io.parse_until("Enter new quantity: ", Quantity::parse)?;
        self.store.update_quantity(&code, quantity.get())?;
        self.io.say("Quantity updated successfully!")
    }

    fn list_flow(&mut self) -> ConsoleResult<()> {
        if self.store.is_empty() {
            return self.io.say("No items to display.");
        }

        self.io.say("\n--- All Inventory Items ---")?;
        for (index, record) in self.store.list_all() {
            self.io.say(format!("{index}. {record}"))?;
        }
        Ok(())
    }

    fn save_flow(&mut self) -> ConsoleResult<()> {
        let filename = self.io.line("Enter filename to save: ")?;
        match self.gateway.save(&self.store, &filename) {
            Ok(path) => self
                .io
                .say(format!("Inventory saved successfully to {}", path.display())),
            Err(err) => self.io.say(format!("Error saving to file: {err}")),
        }
    }

    fn load_flow(&mut self) -> ConsoleResult<()> {
        let filename = self.io.line("Enter filename to load: ")?;
        match self.gateway.load(&filename) {
            Ok((path, store)) => {
                self.store = store;
                self.io
                    .say(format!("Inventory loaded successfully from {}", path.display()))
            }
            Err(PersistenceError::FileNotFound(path)) => {
                self.io.say(format!("File not found: {}", path.display()))
            }
            Err(err) => self.io.say(format!("Error reading file: {err}")),
        }
    }
}
