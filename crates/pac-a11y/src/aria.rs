//! ARIA Support
//!
//! Concrete ARIA roles and the ID-reference attributes.

/// Attributes holding whitespace-separated ID references
pub const ARIA_REFERENCE_ATTRIBUTES: &[&str] = &[
    "aria-labelledby",
    "aria-describedby",
    "aria-controls",
    "aria-owns",
    "aria-activedescendant",
];

/// ARIA role usable in a `role` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // Widget roles
    Alert,
    AlertDialog,
    Button,
    Checkbox,
    ComboBox,
    Dialog,
    Grid,
    GridCell,
    Link,
    ListBox,
    Log,
    Marquee,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    ProgressBar,
    Radio,
    RadioGroup,
    ScrollBar,
    SearchBox,
    Slider,
    SpinButton,
    Status,
    Switch,
    Tab,
    TabList,
    TabPanel,
    TextBox,
    Timer,
    ToolTip,
    Tree,
    TreeGrid,
    TreeItem,

    // Document structure
    Application,
    Article,
    Cell,
    ColumnHeader,
    Definition,
    Directory,
    Document,
    Feed,
    Figure,
    Group,
    Heading,
    Img,
    List,
    ListItem,
    Math,
    None,
    Note,
    Presentation,
    Row,
    RowGroup,
    RowHeader,
    Separator,
    Table,
    Term,
    Toolbar,
}

impl AriaRole {
    /// Parse a single role token, ASCII case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "combobox" => Self::ComboBox,
            "dialog" => Self::Dialog,
            "grid" => Self::Grid,
            "gridcell" => Self::GridCell,
            "link" => Self::Link,
            "listbox" => Self::ListBox,
            "log" => Self::Log,
            "marquee" => Self::Marquee,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::Option,
            "progressbar" => Self::ProgressBar,
            "radio" => Self::Radio,
            "radiogroup" => Self::RadioGroup,
            "scrollbar" => Self::ScrollBar,
            "searchbox" => Self::SearchBox,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "status" => Self::Status,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            "textbox" => Self::TextBox,
            "timer" => Self::Timer,
            "tooltip" => Self::ToolTip,
            "tree" => Self::Tree,
            "treegrid" => Self::TreeGrid,
            "treeitem" => Self::TreeItem,
            "application" => Self::Application,
            "article" => Self::Article,
            "cell" => Self::Cell,
            "columnheader" => Self::ColumnHeader,
            "definition" => Self::Definition,
            "directory" => Self::Directory,
            "document" => Self::Document,
            "feed" => Self::Feed,
            "figure" => Self::Figure,
            "group" => Self::Group,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "math" => Self::Math,
            "none" => Self::None,
            "note" => Self::Note,
            "presentation" => Self::Presentation,
            "row" => Self::Row,
            "rowgroup" => Self::RowGroup,
            "rowheader" => Self::RowHeader,
            "separator" => Self::Separator,
            "table" => Self::Table,
            "term" => Self::Term,
            "toolbar" => Self::Toolbar,
            _ => return Option::None,
        })
    }

    /// Role an element carries without a `role` attribute. `section` and
    /// `form` are taken as region and form whether or not they are named.
    pub fn implicit_for_tag(tag: &str) -> Option<Self> {
        Some(match tag.to_ascii_lowercase().as_str() {
            "header" => Self::Banner,
            "footer" => Self::ContentInfo,
            "aside" => Self::Complementary,
            "nav" => Self::Navigation,
            "main" => Self::Main,
            "form" => Self::Form,
            "section" => Self::Region,
            "search" => Self::Search,
            "article" => Self::Article,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Self::Heading,
            "ul" | "ol" | "menu" => Self::List,
            "li" => Self::ListItem,
            "a" => Self::Link,
            "button" => Self::Button,
            "img" => Self::Img,
            "table" => Self::Table,
            _ => return Option::None,
        })
    }

    /// Check if role is landmark
    pub fn is_landmark(&self) -> bool {
        matches!(
            self,
            Self::Banner
                | Self::Complementary
                | Self::ContentInfo
                | Self::Form
                | Self::Main
                | Self::Navigation
                | Self::Region
                | Self::Search
        )
    }
}

/// A `role` value is valid when it holds at least one token and every
/// token is a known role
pub fn is_valid_role_list(value: &str) -> bool {
    let mut tokens = value.split_ascii_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|t| AriaRole::parse(t).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!(AriaRole::parse("button"), Some(AriaRole::Button));
        assert_eq!(AriaRole::parse("NAVIGATION"), Some(AriaRole::Navigation));
        assert_eq!(AriaRole::parse("none"), Some(AriaRole::None));
        assert_eq!(AriaRole::parse("presentation"), Some(AriaRole::Presentation));
        assert_eq!(AriaRole::parse("generic"), Option::None);
        assert_eq!(AriaRole::parse("btn"), Option::None);
        assert!(AriaRole::Main.is_landmark());
        assert!(!AriaRole::Button.is_landmark());
    }

    #[test]
    fn test_implicit_landmarks() {
        let landmarks: Vec<&str> = ["header", "NAV", "main", "aside", "footer", "form", "section", "search"]
            .into_iter()
            .filter(|tag| AriaRole::implicit_for_tag(tag).is_some_and(|r| r.is_landmark()))
            .collect();
        assert_eq!(landmarks.len(), 8);
        assert_eq!(AriaRole::implicit_for_tag("h3"), Some(AriaRole::Heading));
        assert!(!AriaRole::implicit_for_tag("article").unwrap().is_landmark());
        assert_eq!(AriaRole::implicit_for_tag("div"), Option::None);
    }

    #[test]
    fn test_role_lists() {
        assert!(is_valid_role_list("switch checkbox"));
        assert!(!is_valid_role_list("switch toggle"));
        assert!(!is_valid_role_list("   "));
    }
}
