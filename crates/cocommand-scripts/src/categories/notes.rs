//! Apple Notes category: note and folder CRUD through AppleScript.
//!
//! Every caller-supplied value is bound once to a script variable through an
//! escaped literal and referenced by name afterwards. "Not found" outcomes are
//! detected by the scripts themselves and returned as plain text.

use crate::config::NotesConfig;
use crate::error::DispatchResult;
use crate::registry::{ActionDescriptor, Category};
use crate::schema::{ArgumentRecord, ParamSchema, ParamSpec};
use crate::script::script_literal;

pub const CATEGORY: &str = "notes";

pub const CREATE: &str = "create";
pub const READ: &str = "read";
pub const UPDATE: &str = "update";
pub const DELETE: &str = "delete";
pub const LIST: &str = "list";
pub const LIST_FOLDERS: &str = "list_folders";
pub const CREATE_FOLDER: &str = "create_folder";
pub const DELETE_FOLDER: &str = "delete_folder";
pub const SHOW: &str = "show";
pub const MOVE: &str = "move";

/// Build the notes category for the configured account and default folder.
pub fn category(config: &NotesConfig) -> DispatchResult<Category> {
    let account = script_literal(&config.account)?;
    let default_folder = script_literal(&config.default_folder)?;
    let folder_param = || {
        ParamSpec::string("folder", "Folder name (optional)")
            .with_default(config.default_folder.as_str())
    };
    let title_param = || ParamSpec::string("title", "Note title").required();

    let category = Category::new(CATEGORY, "Apple Notes operations")
        .with_action(ActionDescriptor::parameterized(
            CREATE,
            "Create a new note in Apple Notes app",
            ParamSchema::new(vec![
                title_param(),
                ParamSpec::string("content", "Note content").required(),
                folder_param(),
            ]),
            with_account(&account, create_script),
        ))
        .with_action(ActionDescriptor::parameterized(
            READ,
            "Get content of a note in Apple Notes app",
            ParamSchema::new(vec![title_param(), folder_param()]),
            with_account(&account, read_script),
        ))
        .with_action(ActionDescriptor::parameterized(
            UPDATE,
            "Update an existing note in Apple Notes app",
            ParamSchema::new(vec![
                title_param(),
                ParamSpec::string("content", "New note content").required(),
                folder_param(),
            ]),
            with_account(&account, update_script),
        ))
        .with_action(ActionDescriptor::parameterized(
            DELETE,
            "Delete a note in Apple Notes app",
            ParamSchema::new(vec![title_param(), folder_param()]),
            with_account(&account, delete_script),
        ))
        .with_action(ActionDescriptor::parameterized(
            LIST,
            "List all notes in a folder in Apple Notes app",
            ParamSchema::new(vec![folder_param()]),
            with_account(&account, list_script),
        ))
        .with_action(ActionDescriptor::constant(
            LIST_FOLDERS,
            "List all folders in Notes in Apple Notes app",
            list_folders_script(&account),
        ))
        .with_action(ActionDescriptor::parameterized(
            CREATE_FOLDER,
            "Create a new folder",
            ParamSchema::new(vec![ParamSpec::string("name", "Folder name").required()]),
            with_account(&account, create_folder_script),
        ))
        .with_action(ActionDescriptor::parameterized(
            DELETE_FOLDER,
            "Delete a folder in Apple Notes app",
            ParamSchema::new(vec![ParamSpec::string("name", "Folder name").required()]),
            {
                let account = account.clone();
                move |args| delete_folder_script(&account, &default_folder, args)
            },
        ))
        .with_action(ActionDescriptor::parameterized(
            SHOW,
            "Show a note in the UI in Apple Notes app",
            ParamSchema::new(vec![title_param(), folder_param()]),
            with_account(&account, show_script),
        ))
        .with_action(ActionDescriptor::parameterized(
            MOVE,
            "Move a note to a different folder in Apple Notes app",
            ParamSchema::new(vec![
                title_param(),
                ParamSpec::string("from_folder", "Source folder name (optional)")
                    .with_default(config.default_folder.as_str()),
                ParamSpec::string("to_folder", "Destination folder name").required(),
            ]),
            with_account(&account, move_script),
        ));

    Ok(category)
}

fn with_account(
    account: &str,
    script: fn(&str, &ArgumentRecord) -> DispatchResult<String>,
) -> impl Fn(&ArgumentRecord) -> DispatchResult<String> + Send + Sync + 'static {
    let account = account.to_string();
    move |args| script(&account, args)
}

fn create_script(account: &str, args: &ArgumentRecord) -> DispatchResult<String> {
    Ok(format!(
        r#"set noteTitle to {title}
set noteBody to {content}
set folderName to {folder}
tell application "Notes"
    tell account {account}
        tell folder folderName
            make new note with properties {{name:noteTitle, body:noteBody}}
            return "Note '" & noteTitle & "' created successfully"
        end tell
    end tell
end tell
"#,
        title = args.literal("title")?,
        content = args.literal("content")?,
        folder = args.literal("folder")?,
    ))
}

fn read_script(account: &str, args: &ArgumentRecord) -> DispatchResult<String> {
    Ok(format!(
        r#"set noteTitle to {title}
set folderName to {folder}
tell application "Notes"
    tell account {account}
        tell folder folderName
            set matchingNotes to (every note whose name = noteTitle)
            if length of matchingNotes is 0 then
                return "Note '" & noteTitle & "' not found"
            end if
            return body of (item 1 of matchingNotes)
        end tell
    end tell
end tell
"#,
        title = args.literal("title")?,
        folder = args.literal("folder")?,
    ))
}

fn update_script(account: &str, args: &ArgumentRecord) -> DispatchResult<String> {
    Ok(format!(
        r#"set noteTitle to {title}
set noteBody to {content}
set folderName to {folder}
tell application "Notes"
    tell account {account}
        tell folder folderName
            set matchingNotes to (every note whose name = noteTitle)
            if length of matchingNotes is 0 then
                return "Note '" & noteTitle & "' not found"
            end if
            set theNote to item 1 of matchingNotes
            set body of theNote to noteBody
            return "Note '" & noteTitle & "' updated successfully"
        end tell
    end tell
end tell
"#,
        title = args.literal("title")?,
        content = args.literal("content")?,
        folder = args.literal("folder")?,
    ))
}

fn delete_script(account: &str, args: &ArgumentRecord) -> DispatchResult<String> {
    Ok(format!(
        r#"set noteTitle to {title}
set folderName to {folder}
tell application "Notes"
    tell account {account}
        tell folder folderName
            set matchingNotes to (every note whose name = noteTitle)
            if length of matchingNotes is 0 then
                return "Note '" & noteTitle & "' not found"
            end if
            delete item 1 of matchingNotes
            return "Note '" & noteTitle & "' deleted successfully"
        end tell
    end tell
end tell
"#,
        title = args.literal("title")?,
        folder = args.literal("folder")?,
    ))
}

fn list_script(account: &str, args: &ArgumentRecord) -> DispatchResult<String> {
    Ok(format!(
        r#"set folderName to {folder}
tell application "Notes"
    tell account {account}
        tell folder folderName
            set noteList to ""
            repeat with theNote in notes
                set noteList to noteList & name of theNote & linefeed
            end repeat
            if noteList is "" then
                return "No notes found in folder '" & folderName & "'"
            end if
            return noteList
        end tell
    end tell
end tell
"#,
        folder = args.literal("folder")?,
    ))
}

fn list_folders_script(account: &str) -> String {
    format!(
        r#"tell application "Notes"
    tell account {account}
        set folderList to ""
        repeat with theFolder in folders
            set folderList to folderList & name of theFolder & linefeed
        end repeat
        if folderList is "" then
            return "No folders found"
        end if
        return folderList
    end tell
end tell
"#
    )
}

fn create_folder_script(account: &str, args: &ArgumentRecord) -> DispatchResult<String> {
    Ok(format!(
        r#"set folderName to {name}
tell application "Notes"
    tell account {account}
        try
            if exists folder folderName then
                return "Folder '" & folderName & "' already exists"
            end if
            make new folder with properties {{name:folderName}}
            return "Folder '" & folderName & "' created successfully"
        on error errMsg
            return "Failed to create folder: " & errMsg
        end try
    end tell
end tell
"#,
        name = args.literal("name")?,
    ))
}

fn delete_folder_script(
    account: &str,
    protected_folder: &str,
    args: &ArgumentRecord,
) -> DispatchResult<String> {
    Ok(format!(
        r#"set folderName to {name}
tell application "Notes"
    tell account {account}
        try
            if not (exists folder folderName) then
                return "Folder '" & folderName & "' not found"
            end if
            if folderName is in {{{protected_folder}}} then
                return "Cannot delete default folder '" & folderName & "'"
            end if
            delete folder folderName
            return "Folder '" & folderName & "' deleted successfully"
        on error errMsg
            return "Failed to delete folder: " & errMsg
        end try
    end tell
end tell
"#,
        name = args.literal("name")?,
    ))
}

fn show_script(account: &str, args: &ArgumentRecord) -> DispatchResult<String> {
    Ok(format!(
        r#"set noteTitle to {title}
set folderName to {folder}
tell application "Notes"
    tell account {account}
        tell folder folderName
            set matchingNotes to (every note whose name = noteTitle)
            if length of matchingNotes is 0 then
                return "Note '" & noteTitle & "' not found"
            end if
            set theNote to item 1 of matchingNotes
            show theNote
            activate
            return "Note '" & noteTitle & "' shown in UI"
        end tell
    end tell
end tell
"#,
        title = args.literal("title")?,
        folder = args.literal("folder")?,
    ))
}

fn move_script(account: &str, args: &ArgumentRecord) -> DispatchResult<String> {
    Ok(format!(
        r#"set noteTitle to {title}
set sourceFolderName to {from_folder}
set destFolderName to {to_folder}
tell application "Notes"
    tell account {account}
        try
            set destFolder to folder destFolderName
        on error
            return "Destination folder '" & destFolderName & "' not found"
        end try

        try
            tell folder sourceFolderName
                set matchingNotes to (every note whose name = noteTitle)
                if length of matchingNotes is 0 then
                    return "Note '" & noteTitle & "' not found"
                end if
                set theNote to item 1 of matchingNotes
                move theNote to destFolder
                return "Note '" & noteTitle & "' moved to '" & destFolderName & "' successfully"
            end tell
        on error errMsg
            return "Failed to move note: " & errMsg
        end try
    end tell
end tell
"#,
        title = args.literal("title")?,
        from_folder = args.literal("from_folder")?,
        to_folder = args.literal("to_folder")?,
    ))
}
