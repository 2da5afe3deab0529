mod ids;
mod playlist;
mod song;

pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{PlaylistDocument, PlaylistInput, SelectedPlaylist};
pub use song::{Song, SongFields};
