// Menu state management and the application state machine.

use ratatui::layout::Rect;

use crate::ai::Difficulty;

/// Application state machine: Menu -> Game -> (Over, inside the round) ->
/// Menu, until the user quits.
#[derive(Debug, Clone)]
pub enum AppState {
    Menu,
    Game(Difficulty),
    Exiting,
}

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Easy,
    Medium,
    Hard,
    Quit,
}

impl MenuItem {
    pub fn label(&self) -> String {
        match self {
            MenuItem::Quit => "QUIT".to_string(),
            item => {
                let difficulty = item.difficulty().expect("non-quit item has a difficulty");
                format!(
                    "{} - {}",
                    difficulty.display_name(),
                    difficulty.description()
                )
            }
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            MenuItem::Easy => Some(Difficulty::Easy),
            MenuItem::Medium => Some(Difficulty::Medium),
            MenuItem::Hard => Some(Difficulty::Hard),
            MenuItem::Quit => None,
        }
    }

    pub fn all() -> Vec<MenuItem> {
        vec![MenuItem::Easy, MenuItem::Medium, MenuItem::Hard, MenuItem::Quit]
    }
}

pub struct MenuState {
    pub selected_index: usize,
    pub items: Vec<MenuItem>,
    /// Item currently under the mouse pointer, if any.
    pub hovered_index: Option<usize>,
    /// Screen areas of the items as last rendered, for mouse hit-testing.
    pub item_areas: Vec<Rect>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            items: MenuItem::all(),
            hovered_index: None,
            item_areas: Vec::new(),
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up, wrapping at the top.
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// Move selection down, wrapping at the bottom.
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// Which item, if any, covers the given terminal cell.
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        self.item_areas
            .iter()
            .position(|area| (area.left()..area.right()).contains(&column)
                && (area.top()..area.bottom()).contains(&row))
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut menu = MenuState::new();
        assert_eq!(menu.selected_item(), MenuItem::Easy);

        menu.select_previous();
        assert_eq!(menu.selected_item(), MenuItem::Quit);

        menu.select_next();
        assert_eq!(menu.selected_item(), MenuItem::Easy);

        menu.select_next();
        menu.select_next();
        assert_eq!(menu.selected_item(), MenuItem::Hard);
    }

    #[test]
    fn items_map_to_difficulties() {
        use crate::ai::Difficulty;
        assert_eq!(MenuItem::Easy.difficulty(), Some(Difficulty::Easy));
        assert_eq!(MenuItem::Medium.difficulty(), Some(Difficulty::Medium));
        assert_eq!(MenuItem::Hard.difficulty(), Some(Difficulty::Hard));
        assert_eq!(MenuItem::Quit.difficulty(), None);
    }

    #[test]
    fn mouse_hit_testing_uses_rendered_areas() {
        let mut menu = MenuState::new();
        menu.item_areas = vec![
            Rect::new(10, 5, 20, 1),
            Rect::new(10, 7, 20, 1),
        ];
        assert_eq!(menu.item_at(15, 5), Some(0));
        assert_eq!(menu.item_at(29, 7), Some(1));
        assert_eq!(menu.item_at(30, 7), None);
        assert_eq!(menu.item_at(15, 6), None);
    }
}
