macro_rules! setter {
    // Non-generic forms, so integer literals infer the field type.
    (opt value $field:ident : $ty:ty) => {
        pub fn $field(mut self, $field: $ty) -> Self {
            self.$field = std::option::Option::Some($field);
            self
        }
    };

    (opt value $field:ident . $subfield:ident : $ty:ty) => {
        pub fn $subfield(mut self, $subfield: $ty) -> Self {
            self.$field.$subfield = std::option::Option::Some($subfield);
            self
        }
    };

    ($field:ident : $ty:ty) => {
        pub fn $field<T>(mut self, $field: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field = $field.into();
            self
        }
    };

    ($field:ident . $subfield:ident : $ty:ty) => {
        pub fn $subfield<T>(mut self, $subfield: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field.$subfield = $subfield.into();
            self
        }
    };

    (opt $field:ident : $ty:ty) => {
        pub fn $field<T>(mut self, $field: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field = std::option::Option::Some($field.into());
            self
        }
    };

    (opt $field:ident . $subfield:ident : $ty:ty) => {
        pub fn $subfield<T>(mut self, $subfield: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field.$subfield = Some($subfield.into());
            self
        }
    };
}

/// Fetch-by-id request: `GET {path}/{id}` decoding into `$record`.
macro_rules! get_by_id {
    ($name:ident, $record:ty, $path:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            id: i64,
        }

        impl $name {
            pub fn new(id: i64) -> Self {
                Self { id }
            }
        }

        impl $crate::request::Request for $name {
            type Data = ();
            type Response = $record;

            fn endpoint(&self) -> std::borrow::Cow<'_, str> {
                format!(concat!($path, "/{}"), self.id).into()
            }
        }
    };
}

/// Lookup table served as a plain JSON array, plus its fetch-by-id request.
macro_rules! catalog {
    ($list:ident, $get:ident, $record:ty, $path:literal) => {
        #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $list;

        impl $list {
            pub fn new() -> Self {
                Self
            }
        }

        impl $crate::request::Request for $list {
            type Data = ();
            type Response = Vec<$record>;

            fn endpoint(&self) -> std::borrow::Cow<'_, str> {
                $path.into()
            }
        }

        $crate::macros::get_by_id!($get, $record, $path);
    };
}

/// Collection served through the paginated envelope with only `page`/`pageSize`
/// filters, plus its fetch-by-id request.
macro_rules! paged {
    ($list:ident, $get:ident, $record:ty, $path:literal) => {
        #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $list {
            query: $crate::endpoints::PageQuery,
        }

        impl $list {
            pub fn new() -> Self {
                Self::default()
            }

            $crate::macros::setter!(opt value query.page: u32);
            $crate::macros::setter!(opt value query.page_size: u32);
        }

        impl $crate::request::Request for $list {
            type Data = $crate::endpoints::PageQuery;
            type Response = $crate::endpoints::ListResponse<$record>;

            fn endpoint(&self) -> std::borrow::Cow<'_, str> {
                $path.into()
            }

            fn data(&self) -> $crate::request::RequestData<&Self::Data> {
                $crate::request::RequestData::Query(&self.query)
            }
        }

        $crate::macros::get_by_id!($get, $record, $path);
    };
}

/// Request whose response body is ignored: maintenance actions and deletes.
macro_rules! action {
    ($method:ident $name:ident, $path:literal) => {
        #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            pub fn new() -> Self {
                Self
            }
        }

        impl $crate::request::Request for $name {
            type Data = ();
            type Response = $crate::request::EmptyResponse;
            const METHOD: reqwest::Method = reqwest::Method::$method;

            fn endpoint(&self) -> std::borrow::Cow<'_, str> {
                $path.into()
            }
        }
    };

    ($method:ident $name:ident($($field:ident),+), $path:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            $($field: i64,)+
        }

        impl $name {
            pub fn new($($field: i64),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::request::Request for $name {
            type Data = ();
            type Response = $crate::request::EmptyResponse;
            const METHOD: reqwest::Method = reqwest::Method::$method;

            fn endpoint(&self) -> std::borrow::Cow<'_, str> {
                format!($path, $(self.$field),+).into()
            }
        }
    };
}

pub(crate) use action;
pub(crate) use catalog;
pub(crate) use get_by_id;
pub(crate) use paged;
pub(crate) use setter;
