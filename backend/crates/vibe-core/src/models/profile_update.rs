use crate::{
    ArtistInput, DatingPreference, Gender, Image, Patch, PlaylistInput, ProfileFields, PromptInput,
    Result as CoreErrorResult, SongInput, WorkProfile,
};

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;

/// Partial profile update.
///
/// Scalar fields use [`Patch`]: absent keys leave the stored value alone,
/// `null` clears it. Collections are replace-all: `Some` (even empty) replaces
/// every stored row, `None` (absent or `null`) leaves them untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub university_name: Patch<String>,
    #[serde(default)]
    pub work: Patch<WorkProfile>,
    #[serde(default)]
    pub home_town: Patch<String>,
    #[serde(default)]
    pub height: Patch<String>,
    #[serde(default)]
    pub age: Patch<String>,
    #[serde(default)]
    pub zodiac: Patch<String>,
    #[serde(default, rename = "birthdayInUnix")]
    pub birthday_unix: Patch<i64>,
    /// Validated against [`Gender`] before anything is merged
    #[serde(default)]
    pub gender: Patch<String>,
    /// Validated against [`DatingPreference`] before anything is merged
    #[serde(default)]
    pub dating_preference: Patch<String>,

    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub interest_rating: Option<BTreeMap<String, i32>>,
    #[serde(default)]
    pub prompts: Option<Vec<PromptInput>>,
    #[serde(default)]
    pub top_artists: Option<Vec<ArtistInput>>,
    #[serde(default)]
    pub top_songs: Option<Vec<SongInput>>,
    #[serde(default)]
    pub saved_playlists: Option<Vec<PlaylistInput>>,
}

impl ProfileUpdate {
    /// Merge the scalar part of this update into `fields`.
    ///
    /// Enum fields are validated first; on error `fields` is left untouched.
    #[track_caller]
    pub fn merge_into(&self, fields: &mut ProfileFields) -> CoreErrorResult<()> {
        let gender = self.gender.clone().try_map(|s| Gender::from_str(&s))?;
        let dating_preference = self
            .dating_preference
            .clone()
            .try_map(|s| DatingPreference::from_str(&s))?;

        self.name.clone().apply_to(&mut fields.name);
        self.university_name
            .clone()
            .apply_to(&mut fields.university_name);
        self.work.clone().apply_to(&mut fields.work);
        self.home_town.clone().apply_to(&mut fields.home_town);
        self.height.clone().apply_to(&mut fields.height);
        self.age.clone().apply_to(&mut fields.age);
        self.zodiac.clone().apply_to(&mut fields.zodiac);
        self.birthday_unix.clone().apply_to(&mut fields.birthday_unix);
        gender.apply_to(&mut fields.gender);
        dating_preference.apply_to(&mut fields.dating_preference);

        Ok(())
    }
}
