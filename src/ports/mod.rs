pub mod terminal;

pub use terminal::NotePresenter;
