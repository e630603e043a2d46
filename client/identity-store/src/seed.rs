use crate::models::User;

pub(crate) const AVATAR_DEMO: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150";
pub(crate) const AVATAR_NATURE: &str =
    "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg?auto=compress&cs=tinysrgb&w=150";
pub(crate) const AVATAR_PRO: &str =
    "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150";

/// Demo accounts written on first launch when the `users` key is absent.
/// The follow edges are consistent both ways and the counters match the
/// list sizes.
pub fn default_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            username: "demo_user".into(),
            email: "demo@example.com".into(),
            full_name: "Demo User".into(),
            avatar: AVATAR_DEMO.into(),
            bio: "Photographer and traveler".into(),
            followers: 2,
            following: 2,
            posts: 1,
            following_list: vec!["2".into(), "3".into()],
            followers_list: vec!["2".into(), "3".into()],
        },
        User {
            id: "2".into(),
            username: "nature_lover".into(),
            email: "nature@example.com".into(),
            full_name: "Nature Lover".into(),
            avatar: AVATAR_NATURE.into(),
            bio: "The outdoors is home".into(),
            followers: 1,
            following: 2,
            posts: 1,
            following_list: vec!["1".into(), "3".into()],
            followers_list: vec!["1".into()],
        },
        User {
            id: "3".into(),
            username: "photographer_pro".into(),
            email: "photo@example.com".into(),
            full_name: "Pro Photographer".into(),
            avatar: AVATAR_PRO.into(),
            bio: "Professional photography".into(),
            followers: 2,
            following: 1,
            posts: 0,
            following_list: vec!["1".into()],
            followers_list: vec!["1".into(), "2".into()],
        },
    ]
}
