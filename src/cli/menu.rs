use crate::cli::output;

/// The numbered actions offered by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer,
    CreateAccount,
    Deposit,
    Withdraw,
    DisplayAccounts,
    DisplayTransactions,
    Exit,
    Invalid,
}

struct MenuEntry {
    choice: MenuChoice,
    label: &'static str,
}

static ENTRIES: [MenuEntry; 7] = [
    MenuEntry {
        choice: MenuChoice::AddCustomer,
        label: "Add Customer",
    },
    MenuEntry {
        choice: MenuChoice::CreateAccount,
        label: "Create Account",
    },
    MenuEntry {
        choice: MenuChoice::Deposit,
        label: "Deposit",
    },
    MenuEntry {
        choice: MenuChoice::Withdraw,
        label: "Withdraw",
    },
    MenuEntry {
        choice: MenuChoice::DisplayAccounts,
        label: "Display Accounts",
    },
    MenuEntry {
        choice: MenuChoice::DisplayTransactions,
        label: "Display Transactions",
    },
    MenuEntry {
        choice: MenuChoice::Exit,
        label: "Exit",
    },
];

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

impl MenuChoice {
    /// Maps `1..=7` to an action; anything else is [`MenuChoice::Invalid`].
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| ENTRIES.get(index))
            .map(|entry| entry.choice)
            .unwrap_or(MenuChoice::Invalid)
    }
}

pub fn render() {
    output::section("Banking System Menu");
    output::separator();
    for (index, entry) in ENTRIES.iter().enumerate() {
        output::plain(format!("{}. {}", index + 1, entry.label));
    }
    output::separator();
}
