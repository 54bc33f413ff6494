/// Main menu, printed before every choice.
pub const MENU: &str = "\n===== INVENTORY MANAGEMENT SYSTEM =====\n\
1. Add a new inventory item\n\
2. Delete an inventory item\n\
3. Update item quantity\n\
4. Display all inventory items\n\
5. Save inventory to file\n\
6. Load inventory from file\n\
7. Exit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Update,
    List,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    /// Map a menu number (1-7) to its choice.
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Delete),
            3 => Some(MenuChoice::Update),
            4 => Some(MenuChoice::List),
            5 => Some(MenuChoice::Save),
            6 => Some(MenuChoice::Load),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_outside_menu_are_rejected() {
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(8), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn menu_lists_seven_options() {
        assert_eq!(MENU.lines().filter(|l| l.starts_with(char::is_numeric)).count(), 7);
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::Exit));
    }
}
