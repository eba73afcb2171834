// Interactive shell - numbered menu over a line-based console
//
// Generic over reader/writer so a test can script a whole session against
// in-memory buffers. Every domain error is rendered as its message and the
// menu loop resumes; only the Exit choice or end-of-input stops it.

use std::io::{self, BufRead, Write};

use crate::error::LedgerError;
use crate::service::AccountService;

const NO_ID_MESSAGE: &str = "You must supply an account ID";
const NO_NAME_MESSAGE: &str = "You must supply an account name";
const NO_AMOUNT_MESSAGE: &str = "You must supply a balance";

pub struct Shell<R, W> {
    service: AccountService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(service: AccountService, input: R, output: W) -> Self {
        Shell {
            service,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit or end-of-input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            match choice.trim() {
                "1" => self.add_account()?,
                "2" => self.deposit_money()?,
                "3" => self.withdraw_money()?,
                "4" => self.display_account()?,
                "5" => {
                    writeln!(self.output, "Ending the application")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Enter a number from 1 to 5")?,
            }
        }
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nBanking System Menu:")?;
        writeln!(self.output, "1. Add Account")?;
        writeln!(self.output, "2. Deposit Money")?;
        writeln!(self.output, "3. Withdraw Money")?;
        writeln!(self.output, "4. Display Account Details")?;
        writeln!(self.output, "5. Exit")?;
        self.output.flush()
    }

    fn add_account(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_required("Enter Account ID:", NO_ID_MESSAGE)? else {
            return Ok(());
        };
        let Some(name) = self.prompt_required("Enter Account Holder Name:", NO_NAME_MESSAGE)?
        else {
            return Ok(());
        };

        match self.service.add_account(&id, &name) {
            Ok(()) => writeln!(self.output, "Account added successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn deposit_money(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_required("Enter Account ID:", NO_ID_MESSAGE)? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter Amount to Deposit:")? else {
            return Ok(());
        };

        match self.service.deposit_money(&id, &amount) {
            Ok(()) => writeln!(self.output, "Deposit completed successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn withdraw_money(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_required("Enter Account ID:", NO_ID_MESSAGE)? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter Amount to Withdraw:")? else {
            return Ok(());
        };

        match self.service.withdraw_money(&id, &amount) {
            Ok(()) => writeln!(self.output, "Withdrawal completed successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn display_account(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_required("Enter Account ID:", NO_ID_MESSAGE)? else {
            return Ok(());
        };

        match self.service.get_account_by_id(&id) {
            Ok(Some(account)) => writeln!(self.output, "{}", account),
            Ok(None) => writeln!(self.output, "No account with this id exists"),
            Err(err) => self.report(&err),
        }
    }

    /// Prompt for a field that must not be blank. Blank/whitespace-only
    /// input reports `MissingInput` and returns `None`; so does EOF.
    fn prompt_required(
        &mut self,
        prompt: &str,
        missing: &'static str,
    ) -> io::Result<Option<String>> {
        let Some(value) = self.prompt(prompt)? else {
            return Ok(None);
        };
        if value.trim().is_empty() {
            self.report(&LedgerError::MissingInput(missing))?;
            return Ok(None);
        }
        Ok(Some(value))
    }

    /// Prompt for an amount. Only empty input counts as missing here;
    /// whitespace-only text flows through and fails numeric validation.
    fn prompt_amount(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let Some(value) = self.prompt(prompt)? else {
            return Ok(None);
        };
        if value.is_empty() {
            self.report(&LedgerError::MissingInput(NO_AMOUNT_MESSAGE))?;
            return Ok(None);
        }
        Ok(Some(value))
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// One line of input with the trailing newline stripped. `None` at EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn report(&mut self, err: &LedgerError) -> io::Result<()> {
        writeln!(self.output, "{}", err)
    }
}
