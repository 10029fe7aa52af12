pub struct MenuSection {
    pub items: Vec<MenuItem>,
}

pub struct MenuItem {
    pub title: String,
    pub url: String,
    pub icon: String,
    pub active: bool,
}

fn item(title: &str, url: &str, icon: &str, current_path: &str) -> MenuItem {
    MenuItem {
        title: title.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        active: current_path == url || current_path.starts_with(&format!("{}/", url)),
    }
}

pub fn main_menu(current_path: &str) -> Vec<MenuSection> {
    vec![
        MenuSection {
            items: vec![MenuItem {
                title: "Home".to_string(),
                url: "/".to_string(),
                icon: "fa-home".to_string(),
                active: current_path == "/",
            }],
        },
        MenuSection {
            items: vec![
                item("Players", "/players", "fa-users", current_path),
                item("Calendar", "/events", "fa-calendar", current_path),
                item("Messages", "/messages", "fa-comments", current_path),
            ],
        },
        MenuSection {
            items: vec![item("Tactics board", "/tactics", "fa-chalkboard", current_path)],
        },
    ]
}
