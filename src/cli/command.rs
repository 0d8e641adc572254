use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Add a new contact",
        long_about = "Prompt for a name, address, phone number and email address, then save the new contact."
    )]
    Add,
    #[command(
        about = "Edit an existing contact",
        long_about = "Open a field-selection loop for the contact with the given id: enter 1-4 to pick a field, then type its new value. Leave the selection blank to finish."
    )]
    Edit {
        #[arg(value_name = "ID", help = "Contact id, as shown by find")]
        id: Option<String>,
    },
    #[command(
        about = "Delete a contact",
        long_about = "Remove the contact with the given id from the database."
    )]
    Del {
        #[arg(value_name = "ID", help = "Contact id, as shown by find")]
        id: Option<String>,
    },
    #[command(
        about = "Find contacts by name",
        long_about = "Case-insensitive substring search on contact names. SQL % and _ wildcards are honored; multiple arguments are joined with spaces before matching."
    )]
    Find {
        #[arg(value_name = "NAME", help = "Search text; remaining arguments are joined")]
        name: Vec<String>,
    },
    #[command(about = "List the names of all saved contacts")]
    List,
}
