/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Retrieves a single object and attaches the client to it
macro_rules! obj_from_path {
    ( $c:expr, $path:expr, $rt:ty) => {{
        $c.get::<$rt>($path, None).await.map(|mut v| {
            v.client = Some($c.clone());
            v
        })
    }};
}

// Creates an object from the posted data and attaches the client to the result
macro_rules! obj_create_from_path {
    ( $c:expr, $path:expr, $data:expr, $rt:ty) => {{
        $c.post::<$rt, _>($path, $data).await.map(|mut v| {
            v.client = Some($c.clone());
            v
        })
    }};
}

// Streams the items of a paged list and attaches the client to each one
macro_rules! stream_items_from_path {
    ( $c:expr, $path:expr, $params:expr, $rt:ty) => {{
        let client = $c.clone();
        futures::TryStreamExt::map_ok($c.items::<$rt>($path, $params), move |mut item| {
            item.client = Some(client.clone());
            item
        })
    }};
}

pub(crate) use {obj_create_from_path, obj_from_path, stream_items_from_path};
