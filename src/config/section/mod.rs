//! Configuration section definitions.
//!
//! Each module corresponds to a part of `site.toml`:
//!
//! | Module   | TOML Section      | Purpose                               |
//! |----------|-------------------|---------------------------------------|
//! | `site`   | root keys         | URL, prefix, title, features, paging  |
//! | `menu`   | `[[menu]]`        | Navigation entries                    |
//! | `author` | `[author]`        | Author profile and contacts           |

mod author;
mod menu;
mod site;

pub use author::{Author, RawAuthor};
pub use menu::{MenuItem, RawMenuItem, validate_menu};
pub use site::{
    RawCount, RawSiteConfig, check_not_blank, check_path_prefix, check_url,
    check_url_matches_prefix,
};
