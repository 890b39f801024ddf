// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `image_annotator.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:vision.Feature)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Feature {
    // message fields
    // @@protoc_insertion_point(field:vision.Feature.type)
    pub type_: ::protobuf::EnumOrUnknown<feature::Type>,
    // @@protoc_insertion_point(field:vision.Feature.max_results)
    pub max_results: i32,
    // special fields
    // @@protoc_insertion_point(special_field:vision.Feature.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Feature {
    fn default() -> &'a Feature {
        <Feature as ::protobuf::Message>::default_instance()
    }
}

impl Feature {
    pub fn new() -> Feature {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "type",
            |m: &Feature| { &m.type_ },
            |m: &mut Feature| { &mut m.type_ },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "max_results",
            |m: &Feature| { &m.max_results },
            |m: &mut Feature| { &mut m.max_results },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Feature>(
            "Feature",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Feature {
    const NAME: &'static str = "Feature";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.type_ = is.read_enum_or_unknown()?;
                },
                16 => {
                    self.max_results = is.read_int32()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.type_ != ::protobuf::EnumOrUnknown::new(feature::Type::TYPE_UNSPECIFIED) {
            my_size += ::protobuf::rt::int32_size(1, self.type_.value());
        }
        if self.max_results != 0 {
            my_size += ::protobuf::rt::int32_size(2, self.max_results);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.type_ != ::protobuf::EnumOrUnknown::new(feature::Type::TYPE_UNSPECIFIED) {
            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.type_))?;
        }
        if self.max_results != 0 {
            os.write_int32(2, self.max_results)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Feature {
        Feature::new()
    }

    fn clear(&mut self) {
        self.type_ = ::protobuf::EnumOrUnknown::new(feature::Type::TYPE_UNSPECIFIED);
        self.max_results = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Feature {
        static instance: Feature = Feature {
            type_: ::protobuf::EnumOrUnknown::from_i32(0),
            max_results: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Feature {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Feature").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Feature {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Feature {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `Feature`
pub mod feature {
    #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
    // @@protoc_insertion_point(enum:vision.Feature.Type)
    pub enum Type {
        // @@protoc_insertion_point(enum_value:vision.Feature.Type.TYPE_UNSPECIFIED)
        TYPE_UNSPECIFIED = 0,
        // @@protoc_insertion_point(enum_value:vision.Feature.Type.FACE_DETECTION)
        FACE_DETECTION = 1,
        // @@protoc_insertion_point(enum_value:vision.Feature.Type.LANDMARK_DETECTION)
        LANDMARK_DETECTION = 2,
        // @@protoc_insertion_point(enum_value:vision.Feature.Type.LOGO_DETECTION)
        LOGO_DETECTION = 3,
        // @@protoc_insertion_point(enum_value:vision.Feature.Type.LABEL_DETECTION)
        LABEL_DETECTION = 4,
        // @@protoc_insertion_point(enum_value:vision.Feature.Type.TEXT_DETECTION)
        TEXT_DETECTION = 5,
        // @@protoc_insertion_point(enum_value:vision.Feature.Type.SAFE_SEARCH_DETECTION)
        SAFE_SEARCH_DETECTION = 6,
        // @@protoc_insertion_point(enum_value:vision.Feature.Type.IMAGE_PROPERTIES)
        IMAGE_PROPERTIES = 7,
    }

    impl ::protobuf::Enum for Type {
        const NAME: &'static str = "Type";

        fn value(&self) -> i32 {
            *self as i32
        }

        fn from_i32(value: i32) -> ::std::option::Option<Type> {
            match value {
                0 => ::std::option::Option::Some(Type::TYPE_UNSPECIFIED),
                1 => ::std::option::Option::Some(Type::FACE_DETECTION),
                2 => ::std::option::Option::Some(Type::LANDMARK_DETECTION),
                3 => ::std::option::Option::Some(Type::LOGO_DETECTION),
                4 => ::std::option::Option::Some(Type::LABEL_DETECTION),
                5 => ::std::option::Option::Some(Type::TEXT_DETECTION),
                6 => ::std::option::Option::Some(Type::SAFE_SEARCH_DETECTION),
                7 => ::std::option::Option::Some(Type::IMAGE_PROPERTIES),
                _ => ::std::option::Option::None
            }
        }

        fn from_str(str: &str) -> ::std::option::Option<Type> {
            match str {
                "TYPE_UNSPECIFIED" => ::std::option::Option::Some(Type::TYPE_UNSPECIFIED),
                "FACE_DETECTION" => ::std::option::Option::Some(Type::FACE_DETECTION),
                "LANDMARK_DETECTION" => ::std::option::Option::Some(Type::LANDMARK_DETECTION),
                "LOGO_DETECTION" => ::std::option::Option::Some(Type::LOGO_DETECTION),
                "LABEL_DETECTION" => ::std::option::Option::Some(Type::LABEL_DETECTION),
                "TEXT_DETECTION" => ::std::option::Option::Some(Type::TEXT_DETECTION),
                "SAFE_SEARCH_DETECTION" => ::std::option::Option::Some(Type::SAFE_SEARCH_DETECTION),
                "IMAGE_PROPERTIES" => ::std::option::Option::Some(Type::IMAGE_PROPERTIES),
                _ => ::std::option::Option::None
            }
        }

        const VALUES: &'static [Type] = &[
            Type::TYPE_UNSPECIFIED,
            Type::FACE_DETECTION,
            Type::LANDMARK_DETECTION,
            Type::LOGO_DETECTION,
            Type::LABEL_DETECTION,
            Type::TEXT_DETECTION,
            Type::SAFE_SEARCH_DETECTION,
            Type::IMAGE_PROPERTIES,
        ];
    }

    impl ::protobuf::EnumFull for Type {
        fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().enum_by_package_relative_name("Feature.Type").unwrap()).clone()
        }

        fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
            let index = *self as usize;
            Self::enum_descriptor().value_by_index(index)
        }
    }

    impl ::std::default::Default for Type {
        fn default() -> Self {
            Type::TYPE_UNSPECIFIED
        }
    }

    impl Type {
        pub(in super) fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
            ::protobuf::reflect::GeneratedEnumDescriptorData::new::<Type>("Feature.Type")
        }
    }
}

// @@protoc_insertion_point(message:vision.ImageSource)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct ImageSource {
    // message fields
    // @@protoc_insertion_point(field:vision.ImageSource.gcs_image_uri)
    pub gcs_image_uri: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:vision.ImageSource.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a ImageSource {
    fn default() -> &'a ImageSource {
        <ImageSource as ::protobuf::Message>::default_instance()
    }
}

impl ImageSource {
    pub fn new() -> ImageSource {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "gcs_image_uri",
            |m: &ImageSource| { &m.gcs_image_uri },
            |m: &mut ImageSource| { &mut m.gcs_image_uri },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<ImageSource>(
            "ImageSource",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for ImageSource {
    const NAME: &'static str = "ImageSource";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.gcs_image_uri = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.gcs_image_uri.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.gcs_image_uri);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.gcs_image_uri.is_empty() {
            os.write_string(1, &self.gcs_image_uri)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> ImageSource {
        ImageSource::new()
    }

    fn clear(&mut self) {
        self.gcs_image_uri.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static ImageSource {
        static instance: ImageSource = ImageSource {
            gcs_image_uri: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for ImageSource {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("ImageSource").unwrap()).clone()
    }
}

impl ::std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ImageSource {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.Image)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Image {
    // message fields
    // @@protoc_insertion_point(field:vision.Image.content)
    pub content: ::std::vec::Vec<u8>,
    // @@protoc_insertion_point(field:vision.Image.source)
    pub source: ::protobuf::MessageField<ImageSource>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.Image.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Image {
    fn default() -> &'a Image {
        <Image as ::protobuf::Message>::default_instance()
    }
}

impl Image {
    pub fn new() -> Image {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "content",
            |m: &Image| { &m.content },
            |m: &mut Image| { &mut m.content },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, ImageSource>(
            "source",
            |m: &Image| { &m.source },
            |m: &mut Image| { &mut m.source },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Image>(
            "Image",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Image {
    const NAME: &'static str = "Image";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.content = is.read_bytes()?;
                },
                18 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.source)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.content.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.content);
        }
        if let Some(v) = self.source.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.content.is_empty() {
            os.write_bytes(1, &self.content)?;
        }
        if let Some(v) = self.source.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Image {
        Image::new()
    }

    fn clear(&mut self) {
        self.content.clear();
        self.source.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Image {
        static instance: Image = Image {
            content: ::std::vec::Vec::new(),
            source: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Image {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Image").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Image {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Image {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.AnnotateImageRequest)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct AnnotateImageRequest {
    // message fields
    // @@protoc_insertion_point(field:vision.AnnotateImageRequest.image)
    pub image: ::protobuf::MessageField<Image>,
    // @@protoc_insertion_point(field:vision.AnnotateImageRequest.features)
    pub features: ::std::vec::Vec<Feature>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.AnnotateImageRequest.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a AnnotateImageRequest {
    fn default() -> &'a AnnotateImageRequest {
        <AnnotateImageRequest as ::protobuf::Message>::default_instance()
    }
}

impl AnnotateImageRequest {
    pub fn new() -> AnnotateImageRequest {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Image>(
            "image",
            |m: &AnnotateImageRequest| { &m.image },
            |m: &mut AnnotateImageRequest| { &mut m.image },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "features",
            |m: &AnnotateImageRequest| { &m.features },
            |m: &mut AnnotateImageRequest| { &mut m.features },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<AnnotateImageRequest>(
            "AnnotateImageRequest",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for AnnotateImageRequest {
    const NAME: &'static str = "AnnotateImageRequest";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.image)?;
                },
                18 => {
                    self.features.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.image.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        for value in &self.features {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.image.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        }
        for v in &self.features {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> AnnotateImageRequest {
        AnnotateImageRequest::new()
    }

    fn clear(&mut self) {
        self.image.clear();
        self.features.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static AnnotateImageRequest {
        static instance: AnnotateImageRequest = AnnotateImageRequest {
            image: ::protobuf::MessageField::none(),
            features: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for AnnotateImageRequest {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("AnnotateImageRequest").unwrap()).clone()
    }
}

impl ::std::fmt::Display for AnnotateImageRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for AnnotateImageRequest {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.BatchAnnotateImagesRequest)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct BatchAnnotateImagesRequest {
    // message fields
    // @@protoc_insertion_point(field:vision.BatchAnnotateImagesRequest.requests)
    pub requests: ::std::vec::Vec<AnnotateImageRequest>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.BatchAnnotateImagesRequest.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a BatchAnnotateImagesRequest {
    fn default() -> &'a BatchAnnotateImagesRequest {
        <BatchAnnotateImagesRequest as ::protobuf::Message>::default_instance()
    }
}

impl BatchAnnotateImagesRequest {
    pub fn new() -> BatchAnnotateImagesRequest {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "requests",
            |m: &BatchAnnotateImagesRequest| { &m.requests },
            |m: &mut BatchAnnotateImagesRequest| { &mut m.requests },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<BatchAnnotateImagesRequest>(
            "BatchAnnotateImagesRequest",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for BatchAnnotateImagesRequest {
    const NAME: &'static str = "BatchAnnotateImagesRequest";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.requests.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.requests {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.requests {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> BatchAnnotateImagesRequest {
        BatchAnnotateImagesRequest::new()
    }

    fn clear(&mut self) {
        self.requests.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static BatchAnnotateImagesRequest {
        static instance: BatchAnnotateImagesRequest = BatchAnnotateImagesRequest {
            requests: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for BatchAnnotateImagesRequest {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("BatchAnnotateImagesRequest").unwrap()).clone()
    }
}

impl ::std::fmt::Display for BatchAnnotateImagesRequest {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for BatchAnnotateImagesRequest {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.Vertex)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Vertex {
    // message fields
    // @@protoc_insertion_point(field:vision.Vertex.x)
    pub x: i32,
    // @@protoc_insertion_point(field:vision.Vertex.y)
    pub y: i32,
    // special fields
    // @@protoc_insertion_point(special_field:vision.Vertex.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Vertex {
    fn default() -> &'a Vertex {
        <Vertex as ::protobuf::Message>::default_instance()
    }
}

impl Vertex {
    pub fn new() -> Vertex {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "x",
            |m: &Vertex| { &m.x },
            |m: &mut Vertex| { &mut m.x },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "y",
            |m: &Vertex| { &m.y },
            |m: &mut Vertex| { &mut m.y },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Vertex>(
            "Vertex",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Vertex {
    const NAME: &'static str = "Vertex";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.x = is.read_int32()?;
                },
                16 => {
                    self.y = is.read_int32()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.x != 0 {
            my_size += ::protobuf::rt::int32_size(1, self.x);
        }
        if self.y != 0 {
            my_size += ::protobuf::rt::int32_size(2, self.y);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.x != 0 {
            os.write_int32(1, self.x)?;
        }
        if self.y != 0 {
            os.write_int32(2, self.y)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Vertex {
        Vertex::new()
    }

    fn clear(&mut self) {
        self.x = 0;
        self.y = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Vertex {
        static instance: Vertex = Vertex {
            x: 0,
            y: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Vertex {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Vertex").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Vertex {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.BoundingPoly)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct BoundingPoly {
    // message fields
    // @@protoc_insertion_point(field:vision.BoundingPoly.vertices)
    pub vertices: ::std::vec::Vec<Vertex>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.BoundingPoly.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a BoundingPoly {
    fn default() -> &'a BoundingPoly {
        <BoundingPoly as ::protobuf::Message>::default_instance()
    }
}

impl BoundingPoly {
    pub fn new() -> BoundingPoly {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "vertices",
            |m: &BoundingPoly| { &m.vertices },
            |m: &mut BoundingPoly| { &mut m.vertices },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<BoundingPoly>(
            "BoundingPoly",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for BoundingPoly {
    const NAME: &'static str = "BoundingPoly";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.vertices.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.vertices {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.vertices {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> BoundingPoly {
        BoundingPoly::new()
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static BoundingPoly {
        static instance: BoundingPoly = BoundingPoly {
            vertices: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for BoundingPoly {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("BoundingPoly").unwrap()).clone()
    }
}

impl ::std::fmt::Display for BoundingPoly {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for BoundingPoly {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.LatLng)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct LatLng {
    // message fields
    // @@protoc_insertion_point(field:vision.LatLng.latitude)
    pub latitude: f64,
    // @@protoc_insertion_point(field:vision.LatLng.longitude)
    pub longitude: f64,
    // special fields
    // @@protoc_insertion_point(special_field:vision.LatLng.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a LatLng {
    fn default() -> &'a LatLng {
        <LatLng as ::protobuf::Message>::default_instance()
    }
}

impl LatLng {
    pub fn new() -> LatLng {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "latitude",
            |m: &LatLng| { &m.latitude },
            |m: &mut LatLng| { &mut m.latitude },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "longitude",
            |m: &LatLng| { &m.longitude },
            |m: &mut LatLng| { &mut m.longitude },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<LatLng>(
            "LatLng",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for LatLng {
    const NAME: &'static str = "LatLng";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                9 => {
                    self.latitude = is.read_double()?;
                },
                17 => {
                    self.longitude = is.read_double()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.latitude != 0. {
            my_size += 1 + 8;
        }
        if self.longitude != 0. {
            my_size += 1 + 8;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.latitude != 0. {
            os.write_double(1, self.latitude)?;
        }
        if self.longitude != 0. {
            os.write_double(2, self.longitude)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> LatLng {
        LatLng::new()
    }

    fn clear(&mut self) {
        self.latitude = 0.;
        self.longitude = 0.;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static LatLng {
        static instance: LatLng = LatLng {
            latitude: 0.,
            longitude: 0.,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for LatLng {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("LatLng").unwrap()).clone()
    }
}

impl ::std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for LatLng {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.LocationInfo)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct LocationInfo {
    // message fields
    // @@protoc_insertion_point(field:vision.LocationInfo.lat_lng)
    pub lat_lng: ::protobuf::MessageField<LatLng>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.LocationInfo.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a LocationInfo {
    fn default() -> &'a LocationInfo {
        <LocationInfo as ::protobuf::Message>::default_instance()
    }
}

impl LocationInfo {
    pub fn new() -> LocationInfo {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, LatLng>(
            "lat_lng",
            |m: &LocationInfo| { &m.lat_lng },
            |m: &mut LocationInfo| { &mut m.lat_lng },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<LocationInfo>(
            "LocationInfo",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for LocationInfo {
    const NAME: &'static str = "LocationInfo";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.lat_lng)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.lat_lng.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.lat_lng.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> LocationInfo {
        LocationInfo::new()
    }

    fn clear(&mut self) {
        self.lat_lng.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static LocationInfo {
        static instance: LocationInfo = LocationInfo {
            lat_lng: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for LocationInfo {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("LocationInfo").unwrap()).clone()
    }
}

impl ::std::fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for LocationInfo {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.EntityAnnotation)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct EntityAnnotation {
    // message fields
    // @@protoc_insertion_point(field:vision.EntityAnnotation.mid)
    pub mid: ::std::string::String,
    // @@protoc_insertion_point(field:vision.EntityAnnotation.locale)
    pub locale: ::std::string::String,
    // @@protoc_insertion_point(field:vision.EntityAnnotation.description)
    pub description: ::std::string::String,
    // @@protoc_insertion_point(field:vision.EntityAnnotation.score)
    pub score: f32,
    // @@protoc_insertion_point(field:vision.EntityAnnotation.bounding_poly)
    pub bounding_poly: ::protobuf::MessageField<BoundingPoly>,
    // @@protoc_insertion_point(field:vision.EntityAnnotation.locations)
    pub locations: ::std::vec::Vec<LocationInfo>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.EntityAnnotation.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a EntityAnnotation {
    fn default() -> &'a EntityAnnotation {
        <EntityAnnotation as ::protobuf::Message>::default_instance()
    }
}

impl EntityAnnotation {
    pub fn new() -> EntityAnnotation {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(6);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "mid",
            |m: &EntityAnnotation| { &m.mid },
            |m: &mut EntityAnnotation| { &mut m.mid },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "locale",
            |m: &EntityAnnotation| { &m.locale },
            |m: &mut EntityAnnotation| { &mut m.locale },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "description",
            |m: &EntityAnnotation| { &m.description },
            |m: &mut EntityAnnotation| { &mut m.description },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "score",
            |m: &EntityAnnotation| { &m.score },
            |m: &mut EntityAnnotation| { &mut m.score },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, BoundingPoly>(
            "bounding_poly",
            |m: &EntityAnnotation| { &m.bounding_poly },
            |m: &mut EntityAnnotation| { &mut m.bounding_poly },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "locations",
            |m: &EntityAnnotation| { &m.locations },
            |m: &mut EntityAnnotation| { &mut m.locations },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<EntityAnnotation>(
            "EntityAnnotation",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for EntityAnnotation {
    const NAME: &'static str = "EntityAnnotation";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.mid = is.read_string()?;
                },
                18 => {
                    self.locale = is.read_string()?;
                },
                26 => {
                    self.description = is.read_string()?;
                },
                37 => {
                    self.score = is.read_float()?;
                },
                58 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.bounding_poly)?;
                },
                66 => {
                    self.locations.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.mid.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.mid);
        }
        if !self.locale.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.locale);
        }
        if !self.description.is_empty() {
            my_size += ::protobuf::rt::string_size(3, &self.description);
        }
        if self.score != 0. {
            my_size += 1 + 4;
        }
        if let Some(v) = self.bounding_poly.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        for value in &self.locations {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.mid.is_empty() {
            os.write_string(1, &self.mid)?;
        }
        if !self.locale.is_empty() {
            os.write_string(2, &self.locale)?;
        }
        if !self.description.is_empty() {
            os.write_string(3, &self.description)?;
        }
        if self.score != 0. {
            os.write_float(4, self.score)?;
        }
        if let Some(v) = self.bounding_poly.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(7, v, os)?;
        }
        for v in &self.locations {
            ::protobuf::rt::write_message_field_with_cached_size(8, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> EntityAnnotation {
        EntityAnnotation::new()
    }

    fn clear(&mut self) {
        self.mid.clear();
        self.locale.clear();
        self.description.clear();
        self.score = 0.;
        self.bounding_poly.clear();
        self.locations.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static EntityAnnotation {
        static instance: EntityAnnotation = EntityAnnotation {
            mid: ::std::string::String::new(),
            locale: ::std::string::String::new(),
            description: ::std::string::String::new(),
            score: 0.,
            bounding_poly: ::protobuf::MessageField::none(),
            locations: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for EntityAnnotation {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("EntityAnnotation").unwrap()).clone()
    }
}

impl ::std::fmt::Display for EntityAnnotation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for EntityAnnotation {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.FaceAnnotation)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct FaceAnnotation {
    // message fields
    // @@protoc_insertion_point(field:vision.FaceAnnotation.bounding_poly)
    pub bounding_poly: ::protobuf::MessageField<BoundingPoly>,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.fd_bounding_poly)
    pub fd_bounding_poly: ::protobuf::MessageField<BoundingPoly>,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.roll_angle)
    pub roll_angle: f32,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.pan_angle)
    pub pan_angle: f32,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.tilt_angle)
    pub tilt_angle: f32,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.detection_confidence)
    pub detection_confidence: f32,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.landmarking_confidence)
    pub landmarking_confidence: f32,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.joy_likelihood)
    pub joy_likelihood: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.sorrow_likelihood)
    pub sorrow_likelihood: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.anger_likelihood)
    pub anger_likelihood: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.surprise_likelihood)
    pub surprise_likelihood: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.under_exposed_likelihood)
    pub under_exposed_likelihood: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.blurred_likelihood)
    pub blurred_likelihood: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.FaceAnnotation.headwear_likelihood)
    pub headwear_likelihood: ::protobuf::EnumOrUnknown<Likelihood>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.FaceAnnotation.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a FaceAnnotation {
    fn default() -> &'a FaceAnnotation {
        <FaceAnnotation as ::protobuf::Message>::default_instance()
    }
}

impl FaceAnnotation {
    pub fn new() -> FaceAnnotation {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(14);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, BoundingPoly>(
            "bounding_poly",
            |m: &FaceAnnotation| { &m.bounding_poly },
            |m: &mut FaceAnnotation| { &mut m.bounding_poly },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, BoundingPoly>(
            "fd_bounding_poly",
            |m: &FaceAnnotation| { &m.fd_bounding_poly },
            |m: &mut FaceAnnotation| { &mut m.fd_bounding_poly },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "roll_angle",
            |m: &FaceAnnotation| { &m.roll_angle },
            |m: &mut FaceAnnotation| { &mut m.roll_angle },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "pan_angle",
            |m: &FaceAnnotation| { &m.pan_angle },
            |m: &mut FaceAnnotation| { &mut m.pan_angle },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "tilt_angle",
            |m: &FaceAnnotation| { &m.tilt_angle },
            |m: &mut FaceAnnotation| { &mut m.tilt_angle },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "detection_confidence",
            |m: &FaceAnnotation| { &m.detection_confidence },
            |m: &mut FaceAnnotation| { &mut m.detection_confidence },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "landmarking_confidence",
            |m: &FaceAnnotation| { &m.landmarking_confidence },
            |m: &mut FaceAnnotation| { &mut m.landmarking_confidence },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "joy_likelihood",
            |m: &FaceAnnotation| { &m.joy_likelihood },
            |m: &mut FaceAnnotation| { &mut m.joy_likelihood },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "sorrow_likelihood",
            |m: &FaceAnnotation| { &m.sorrow_likelihood },
            |m: &mut FaceAnnotation| { &mut m.sorrow_likelihood },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "anger_likelihood",
            |m: &FaceAnnotation| { &m.anger_likelihood },
            |m: &mut FaceAnnotation| { &mut m.anger_likelihood },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "surprise_likelihood",
            |m: &FaceAnnotation| { &m.surprise_likelihood },
            |m: &mut FaceAnnotation| { &mut m.surprise_likelihood },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "under_exposed_likelihood",
            |m: &FaceAnnotation| { &m.under_exposed_likelihood },
            |m: &mut FaceAnnotation| { &mut m.under_exposed_likelihood },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "blurred_likelihood",
            |m: &FaceAnnotation| { &m.blurred_likelihood },
            |m: &mut FaceAnnotation| { &mut m.blurred_likelihood },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "headwear_likelihood",
            |m: &FaceAnnotation| { &m.headwear_likelihood },
            |m: &mut FaceAnnotation| { &mut m.headwear_likelihood },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<FaceAnnotation>(
            "FaceAnnotation",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for FaceAnnotation {
    const NAME: &'static str = "FaceAnnotation";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.bounding_poly)?;
                },
                18 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.fd_bounding_poly)?;
                },
                37 => {
                    self.roll_angle = is.read_float()?;
                },
                45 => {
                    self.pan_angle = is.read_float()?;
                },
                53 => {
                    self.tilt_angle = is.read_float()?;
                },
                61 => {
                    self.detection_confidence = is.read_float()?;
                },
                69 => {
                    self.landmarking_confidence = is.read_float()?;
                },
                72 => {
                    self.joy_likelihood = is.read_enum_or_unknown()?;
                },
                80 => {
                    self.sorrow_likelihood = is.read_enum_or_unknown()?;
                },
                88 => {
                    self.anger_likelihood = is.read_enum_or_unknown()?;
                },
                96 => {
                    self.surprise_likelihood = is.read_enum_or_unknown()?;
                },
                104 => {
                    self.under_exposed_likelihood = is.read_enum_or_unknown()?;
                },
                112 => {
                    self.blurred_likelihood = is.read_enum_or_unknown()?;
                },
                120 => {
                    self.headwear_likelihood = is.read_enum_or_unknown()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.bounding_poly.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.fd_bounding_poly.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if self.roll_angle != 0. {
            my_size += 1 + 4;
        }
        if self.pan_angle != 0. {
            my_size += 1 + 4;
        }
        if self.tilt_angle != 0. {
            my_size += 1 + 4;
        }
        if self.detection_confidence != 0. {
            my_size += 1 + 4;
        }
        if self.landmarking_confidence != 0. {
            my_size += 1 + 4;
        }
        if self.joy_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(9, self.joy_likelihood.value());
        }
        if self.sorrow_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(10, self.sorrow_likelihood.value());
        }
        if self.anger_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(11, self.anger_likelihood.value());
        }
        if self.surprise_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(12, self.surprise_likelihood.value());
        }
        if self.under_exposed_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(13, self.under_exposed_likelihood.value());
        }
        if self.blurred_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(14, self.blurred_likelihood.value());
        }
        if self.headwear_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(15, self.headwear_likelihood.value());
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.bounding_poly.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        }
        if let Some(v) = self.fd_bounding_poly.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        }
        if self.roll_angle != 0. {
            os.write_float(4, self.roll_angle)?;
        }
        if self.pan_angle != 0. {
            os.write_float(5, self.pan_angle)?;
        }
        if self.tilt_angle != 0. {
            os.write_float(6, self.tilt_angle)?;
        }
        if self.detection_confidence != 0. {
            os.write_float(7, self.detection_confidence)?;
        }
        if self.landmarking_confidence != 0. {
            os.write_float(8, self.landmarking_confidence)?;
        }
        if self.joy_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(9, ::protobuf::EnumOrUnknown::value(&self.joy_likelihood))?;
        }
        if self.sorrow_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(10, ::protobuf::EnumOrUnknown::value(&self.sorrow_likelihood))?;
        }
        if self.anger_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(11, ::protobuf::EnumOrUnknown::value(&self.anger_likelihood))?;
        }
        if self.surprise_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(12, ::protobuf::EnumOrUnknown::value(&self.surprise_likelihood))?;
        }
        if self.under_exposed_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(13, ::protobuf::EnumOrUnknown::value(&self.under_exposed_likelihood))?;
        }
        if self.blurred_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(14, ::protobuf::EnumOrUnknown::value(&self.blurred_likelihood))?;
        }
        if self.headwear_likelihood != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(15, ::protobuf::EnumOrUnknown::value(&self.headwear_likelihood))?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> FaceAnnotation {
        FaceAnnotation::new()
    }

    fn clear(&mut self) {
        self.bounding_poly.clear();
        self.fd_bounding_poly.clear();
        self.roll_angle = 0.;
        self.pan_angle = 0.;
        self.tilt_angle = 0.;
        self.detection_confidence = 0.;
        self.landmarking_confidence = 0.;
        self.joy_likelihood = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.sorrow_likelihood = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.anger_likelihood = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.surprise_likelihood = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.under_exposed_likelihood = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.blurred_likelihood = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.headwear_likelihood = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.special_fields.clear();
    }

    fn default_instance() -> &'static FaceAnnotation {
        static instance: FaceAnnotation = FaceAnnotation {
            bounding_poly: ::protobuf::MessageField::none(),
            fd_bounding_poly: ::protobuf::MessageField::none(),
            roll_angle: 0.,
            pan_angle: 0.,
            tilt_angle: 0.,
            detection_confidence: 0.,
            landmarking_confidence: 0.,
            joy_likelihood: ::protobuf::EnumOrUnknown::from_i32(0),
            sorrow_likelihood: ::protobuf::EnumOrUnknown::from_i32(0),
            anger_likelihood: ::protobuf::EnumOrUnknown::from_i32(0),
            surprise_likelihood: ::protobuf::EnumOrUnknown::from_i32(0),
            under_exposed_likelihood: ::protobuf::EnumOrUnknown::from_i32(0),
            blurred_likelihood: ::protobuf::EnumOrUnknown::from_i32(0),
            headwear_likelihood: ::protobuf::EnumOrUnknown::from_i32(0),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for FaceAnnotation {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("FaceAnnotation").unwrap()).clone()
    }
}

impl ::std::fmt::Display for FaceAnnotation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for FaceAnnotation {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.SafeSearchAnnotation)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct SafeSearchAnnotation {
    // message fields
    // @@protoc_insertion_point(field:vision.SafeSearchAnnotation.adult)
    pub adult: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.SafeSearchAnnotation.spoof)
    pub spoof: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.SafeSearchAnnotation.medical)
    pub medical: ::protobuf::EnumOrUnknown<Likelihood>,
    // @@protoc_insertion_point(field:vision.SafeSearchAnnotation.violence)
    pub violence: ::protobuf::EnumOrUnknown<Likelihood>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.SafeSearchAnnotation.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a SafeSearchAnnotation {
    fn default() -> &'a SafeSearchAnnotation {
        <SafeSearchAnnotation as ::protobuf::Message>::default_instance()
    }
}

impl SafeSearchAnnotation {
    pub fn new() -> SafeSearchAnnotation {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(4);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "adult",
            |m: &SafeSearchAnnotation| { &m.adult },
            |m: &mut SafeSearchAnnotation| { &mut m.adult },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "spoof",
            |m: &SafeSearchAnnotation| { &m.spoof },
            |m: &mut SafeSearchAnnotation| { &mut m.spoof },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "medical",
            |m: &SafeSearchAnnotation| { &m.medical },
            |m: &mut SafeSearchAnnotation| { &mut m.medical },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "violence",
            |m: &SafeSearchAnnotation| { &m.violence },
            |m: &mut SafeSearchAnnotation| { &mut m.violence },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<SafeSearchAnnotation>(
            "SafeSearchAnnotation",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for SafeSearchAnnotation {
    const NAME: &'static str = "SafeSearchAnnotation";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.adult = is.read_enum_or_unknown()?;
                },
                16 => {
                    self.spoof = is.read_enum_or_unknown()?;
                },
                24 => {
                    self.medical = is.read_enum_or_unknown()?;
                },
                32 => {
                    self.violence = is.read_enum_or_unknown()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.adult != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(1, self.adult.value());
        }
        if self.spoof != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(2, self.spoof.value());
        }
        if self.medical != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(3, self.medical.value());
        }
        if self.violence != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            my_size += ::protobuf::rt::int32_size(4, self.violence.value());
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.adult != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.adult))?;
        }
        if self.spoof != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(2, ::protobuf::EnumOrUnknown::value(&self.spoof))?;
        }
        if self.medical != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(3, ::protobuf::EnumOrUnknown::value(&self.medical))?;
        }
        if self.violence != ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN) {
            os.write_enum(4, ::protobuf::EnumOrUnknown::value(&self.violence))?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> SafeSearchAnnotation {
        SafeSearchAnnotation::new()
    }

    fn clear(&mut self) {
        self.adult = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.spoof = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.medical = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.violence = ::protobuf::EnumOrUnknown::new(Likelihood::UNKNOWN);
        self.special_fields.clear();
    }

    fn default_instance() -> &'static SafeSearchAnnotation {
        static instance: SafeSearchAnnotation = SafeSearchAnnotation {
            adult: ::protobuf::EnumOrUnknown::from_i32(0),
            spoof: ::protobuf::EnumOrUnknown::from_i32(0),
            medical: ::protobuf::EnumOrUnknown::from_i32(0),
            violence: ::protobuf::EnumOrUnknown::from_i32(0),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for SafeSearchAnnotation {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("SafeSearchAnnotation").unwrap()).clone()
    }
}

impl ::std::fmt::Display for SafeSearchAnnotation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for SafeSearchAnnotation {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.Color)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Color {
    // message fields
    // @@protoc_insertion_point(field:vision.Color.red)
    pub red: f32,
    // @@protoc_insertion_point(field:vision.Color.green)
    pub green: f32,
    // @@protoc_insertion_point(field:vision.Color.blue)
    pub blue: f32,
    // @@protoc_insertion_point(field:vision.Color.alpha)
    pub alpha: f32,
    // special fields
    // @@protoc_insertion_point(special_field:vision.Color.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Color {
    fn default() -> &'a Color {
        <Color as ::protobuf::Message>::default_instance()
    }
}

impl Color {
    pub fn new() -> Color {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(4);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "red",
            |m: &Color| { &m.red },
            |m: &mut Color| { &mut m.red },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "green",
            |m: &Color| { &m.green },
            |m: &mut Color| { &mut m.green },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "blue",
            |m: &Color| { &m.blue },
            |m: &mut Color| { &mut m.blue },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "alpha",
            |m: &Color| { &m.alpha },
            |m: &mut Color| { &mut m.alpha },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Color>(
            "Color",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Color {
    const NAME: &'static str = "Color";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                13 => {
                    self.red = is.read_float()?;
                },
                21 => {
                    self.green = is.read_float()?;
                },
                29 => {
                    self.blue = is.read_float()?;
                },
                37 => {
                    self.alpha = is.read_float()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.red != 0. {
            my_size += 1 + 4;
        }
        if self.green != 0. {
            my_size += 1 + 4;
        }
        if self.blue != 0. {
            my_size += 1 + 4;
        }
        if self.alpha != 0. {
            my_size += 1 + 4;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.red != 0. {
            os.write_float(1, self.red)?;
        }
        if self.green != 0. {
            os.write_float(2, self.green)?;
        }
        if self.blue != 0. {
            os.write_float(3, self.blue)?;
        }
        if self.alpha != 0. {
            os.write_float(4, self.alpha)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Color {
        Color::new()
    }

    fn clear(&mut self) {
        self.red = 0.;
        self.green = 0.;
        self.blue = 0.;
        self.alpha = 0.;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Color {
        static instance: Color = Color {
            red: 0.,
            green: 0.,
            blue: 0.,
            alpha: 0.,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Color {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Color").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Color {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Color {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.ColorInfo)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct ColorInfo {
    // message fields
    // @@protoc_insertion_point(field:vision.ColorInfo.color)
    pub color: ::protobuf::MessageField<Color>,
    // @@protoc_insertion_point(field:vision.ColorInfo.score)
    pub score: f32,
    // @@protoc_insertion_point(field:vision.ColorInfo.pixel_fraction)
    pub pixel_fraction: f32,
    // special fields
    // @@protoc_insertion_point(special_field:vision.ColorInfo.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a ColorInfo {
    fn default() -> &'a ColorInfo {
        <ColorInfo as ::protobuf::Message>::default_instance()
    }
}

impl ColorInfo {
    pub fn new() -> ColorInfo {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Color>(
            "color",
            |m: &ColorInfo| { &m.color },
            |m: &mut ColorInfo| { &mut m.color },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "score",
            |m: &ColorInfo| { &m.score },
            |m: &mut ColorInfo| { &mut m.score },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "pixel_fraction",
            |m: &ColorInfo| { &m.pixel_fraction },
            |m: &mut ColorInfo| { &mut m.pixel_fraction },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<ColorInfo>(
            "ColorInfo",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for ColorInfo {
    const NAME: &'static str = "ColorInfo";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.color)?;
                },
                21 => {
                    self.score = is.read_float()?;
                },
                29 => {
                    self.pixel_fraction = is.read_float()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.color.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if self.score != 0. {
            my_size += 1 + 4;
        }
        if self.pixel_fraction != 0. {
            my_size += 1 + 4;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.color.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        }
        if self.score != 0. {
            os.write_float(2, self.score)?;
        }
        if self.pixel_fraction != 0. {
            os.write_float(3, self.pixel_fraction)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> ColorInfo {
        ColorInfo::new()
    }

    fn clear(&mut self) {
        self.color.clear();
        self.score = 0.;
        self.pixel_fraction = 0.;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static ColorInfo {
        static instance: ColorInfo = ColorInfo {
            color: ::protobuf::MessageField::none(),
            score: 0.,
            pixel_fraction: 0.,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for ColorInfo {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("ColorInfo").unwrap()).clone()
    }
}

impl ::std::fmt::Display for ColorInfo {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ColorInfo {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.DominantColorsAnnotation)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct DominantColorsAnnotation {
    // message fields
    // @@protoc_insertion_point(field:vision.DominantColorsAnnotation.colors)
    pub colors: ::std::vec::Vec<ColorInfo>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.DominantColorsAnnotation.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a DominantColorsAnnotation {
    fn default() -> &'a DominantColorsAnnotation {
        <DominantColorsAnnotation as ::protobuf::Message>::default_instance()
    }
}

impl DominantColorsAnnotation {
    pub fn new() -> DominantColorsAnnotation {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "colors",
            |m: &DominantColorsAnnotation| { &m.colors },
            |m: &mut DominantColorsAnnotation| { &mut m.colors },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<DominantColorsAnnotation>(
            "DominantColorsAnnotation",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for DominantColorsAnnotation {
    const NAME: &'static str = "DominantColorsAnnotation";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.colors.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.colors {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.colors {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> DominantColorsAnnotation {
        DominantColorsAnnotation::new()
    }

    fn clear(&mut self) {
        self.colors.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static DominantColorsAnnotation {
        static instance: DominantColorsAnnotation = DominantColorsAnnotation {
            colors: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for DominantColorsAnnotation {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("DominantColorsAnnotation").unwrap()).clone()
    }
}

impl ::std::fmt::Display for DominantColorsAnnotation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for DominantColorsAnnotation {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.ImageProperties)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct ImageProperties {
    // message fields
    // @@protoc_insertion_point(field:vision.ImageProperties.dominant_colors)
    pub dominant_colors: ::protobuf::MessageField<DominantColorsAnnotation>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.ImageProperties.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a ImageProperties {
    fn default() -> &'a ImageProperties {
        <ImageProperties as ::protobuf::Message>::default_instance()
    }
}

impl ImageProperties {
    pub fn new() -> ImageProperties {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, DominantColorsAnnotation>(
            "dominant_colors",
            |m: &ImageProperties| { &m.dominant_colors },
            |m: &mut ImageProperties| { &mut m.dominant_colors },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<ImageProperties>(
            "ImageProperties",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for ImageProperties {
    const NAME: &'static str = "ImageProperties";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.dominant_colors)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.dominant_colors.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.dominant_colors.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> ImageProperties {
        ImageProperties::new()
    }

    fn clear(&mut self) {
        self.dominant_colors.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static ImageProperties {
        static instance: ImageProperties = ImageProperties {
            dominant_colors: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for ImageProperties {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("ImageProperties").unwrap()).clone()
    }
}

impl ::std::fmt::Display for ImageProperties {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for ImageProperties {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.Status)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Status {
    // message fields
    // @@protoc_insertion_point(field:vision.Status.code)
    pub code: i32,
    // @@protoc_insertion_point(field:vision.Status.message)
    pub message: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:vision.Status.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Status {
    fn default() -> &'a Status {
        <Status as ::protobuf::Message>::default_instance()
    }
}

impl Status {
    pub fn new() -> Status {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "code",
            |m: &Status| { &m.code },
            |m: &mut Status| { &mut m.code },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "message",
            |m: &Status| { &m.message },
            |m: &mut Status| { &mut m.message },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Status>(
            "Status",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Status {
    const NAME: &'static str = "Status";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.code = is.read_int32()?;
                },
                18 => {
                    self.message = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.code != 0 {
            my_size += ::protobuf::rt::int32_size(1, self.code);
        }
        if !self.message.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.message);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.code != 0 {
            os.write_int32(1, self.code)?;
        }
        if !self.message.is_empty() {
            os.write_string(2, &self.message)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Status {
        Status::new()
    }

    fn clear(&mut self) {
        self.code = 0;
        self.message.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Status {
        static instance: Status = Status {
            code: 0,
            message: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Status {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Status").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Status {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Status {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.AnnotateImageResponse)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct AnnotateImageResponse {
    // message fields
    // @@protoc_insertion_point(field:vision.AnnotateImageResponse.face_annotations)
    pub face_annotations: ::std::vec::Vec<FaceAnnotation>,
    // @@protoc_insertion_point(field:vision.AnnotateImageResponse.landmark_annotations)
    pub landmark_annotations: ::std::vec::Vec<EntityAnnotation>,
    // @@protoc_insertion_point(field:vision.AnnotateImageResponse.logo_annotations)
    pub logo_annotations: ::std::vec::Vec<EntityAnnotation>,
    // @@protoc_insertion_point(field:vision.AnnotateImageResponse.label_annotations)
    pub label_annotations: ::std::vec::Vec<EntityAnnotation>,
    // @@protoc_insertion_point(field:vision.AnnotateImageResponse.text_annotations)
    pub text_annotations: ::std::vec::Vec<EntityAnnotation>,
    // @@protoc_insertion_point(field:vision.AnnotateImageResponse.safe_search_annotation)
    pub safe_search_annotation: ::protobuf::MessageField<SafeSearchAnnotation>,
    // @@protoc_insertion_point(field:vision.AnnotateImageResponse.image_properties_annotation)
    pub image_properties_annotation: ::protobuf::MessageField<ImageProperties>,
    // @@protoc_insertion_point(field:vision.AnnotateImageResponse.error)
    pub error: ::protobuf::MessageField<Status>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.AnnotateImageResponse.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a AnnotateImageResponse {
    fn default() -> &'a AnnotateImageResponse {
        <AnnotateImageResponse as ::protobuf::Message>::default_instance()
    }
}

impl AnnotateImageResponse {
    pub fn new() -> AnnotateImageResponse {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(8);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "face_annotations",
            |m: &AnnotateImageResponse| { &m.face_annotations },
            |m: &mut AnnotateImageResponse| { &mut m.face_annotations },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "landmark_annotations",
            |m: &AnnotateImageResponse| { &m.landmark_annotations },
            |m: &mut AnnotateImageResponse| { &mut m.landmark_annotations },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "logo_annotations",
            |m: &AnnotateImageResponse| { &m.logo_annotations },
            |m: &mut AnnotateImageResponse| { &mut m.logo_annotations },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "label_annotations",
            |m: &AnnotateImageResponse| { &m.label_annotations },
            |m: &mut AnnotateImageResponse| { &mut m.label_annotations },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "text_annotations",
            |m: &AnnotateImageResponse| { &m.text_annotations },
            |m: &mut AnnotateImageResponse| { &mut m.text_annotations },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, SafeSearchAnnotation>(
            "safe_search_annotation",
            |m: &AnnotateImageResponse| { &m.safe_search_annotation },
            |m: &mut AnnotateImageResponse| { &mut m.safe_search_annotation },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, ImageProperties>(
            "image_properties_annotation",
            |m: &AnnotateImageResponse| { &m.image_properties_annotation },
            |m: &mut AnnotateImageResponse| { &mut m.image_properties_annotation },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Status>(
            "error",
            |m: &AnnotateImageResponse| { &m.error },
            |m: &mut AnnotateImageResponse| { &mut m.error },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<AnnotateImageResponse>(
            "AnnotateImageResponse",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for AnnotateImageResponse {
    const NAME: &'static str = "AnnotateImageResponse";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.face_annotations.push(is.read_message()?);
                },
                18 => {
                    self.landmark_annotations.push(is.read_message()?);
                },
                26 => {
                    self.logo_annotations.push(is.read_message()?);
                },
                34 => {
                    self.label_annotations.push(is.read_message()?);
                },
                42 => {
                    self.text_annotations.push(is.read_message()?);
                },
                50 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.safe_search_annotation)?;
                },
                66 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.image_properties_annotation)?;
                },
                74 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.error)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.face_annotations {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.landmark_annotations {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.logo_annotations {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.label_annotations {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.text_annotations {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        if let Some(v) = self.safe_search_annotation.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.image_properties_annotation.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.error.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.face_annotations {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        };
        for v in &self.landmark_annotations {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        for v in &self.logo_annotations {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        };
        for v in &self.label_annotations {
            ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
        };
        for v in &self.text_annotations {
            ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
        };
        if let Some(v) = self.safe_search_annotation.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(6, v, os)?;
        }
        if let Some(v) = self.image_properties_annotation.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(8, v, os)?;
        }
        if let Some(v) = self.error.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(9, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> AnnotateImageResponse {
        AnnotateImageResponse::new()
    }

    fn clear(&mut self) {
        self.face_annotations.clear();
        self.landmark_annotations.clear();
        self.logo_annotations.clear();
        self.label_annotations.clear();
        self.text_annotations.clear();
        self.safe_search_annotation.clear();
        self.image_properties_annotation.clear();
        self.error.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static AnnotateImageResponse {
        static instance: AnnotateImageResponse = AnnotateImageResponse {
            face_annotations: ::std::vec::Vec::new(),
            landmark_annotations: ::std::vec::Vec::new(),
            logo_annotations: ::std::vec::Vec::new(),
            label_annotations: ::std::vec::Vec::new(),
            text_annotations: ::std::vec::Vec::new(),
            safe_search_annotation: ::protobuf::MessageField::none(),
            image_properties_annotation: ::protobuf::MessageField::none(),
            error: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for AnnotateImageResponse {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("AnnotateImageResponse").unwrap()).clone()
    }
}

impl ::std::fmt::Display for AnnotateImageResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for AnnotateImageResponse {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:vision.BatchAnnotateImagesResponse)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct BatchAnnotateImagesResponse {
    // message fields
    // @@protoc_insertion_point(field:vision.BatchAnnotateImagesResponse.responses)
    pub responses: ::std::vec::Vec<AnnotateImageResponse>,
    // special fields
    // @@protoc_insertion_point(special_field:vision.BatchAnnotateImagesResponse.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a BatchAnnotateImagesResponse {
    fn default() -> &'a BatchAnnotateImagesResponse {
        <BatchAnnotateImagesResponse as ::protobuf::Message>::default_instance()
    }
}

impl BatchAnnotateImagesResponse {
    pub fn new() -> BatchAnnotateImagesResponse {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "responses",
            |m: &BatchAnnotateImagesResponse| { &m.responses },
            |m: &mut BatchAnnotateImagesResponse| { &mut m.responses },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<BatchAnnotateImagesResponse>(
            "BatchAnnotateImagesResponse",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for BatchAnnotateImagesResponse {
    const NAME: &'static str = "BatchAnnotateImagesResponse";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.responses.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.responses {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.responses {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> BatchAnnotateImagesResponse {
        BatchAnnotateImagesResponse::new()
    }

    fn clear(&mut self) {
        self.responses.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static BatchAnnotateImagesResponse {
        static instance: BatchAnnotateImagesResponse = BatchAnnotateImagesResponse {
            responses: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for BatchAnnotateImagesResponse {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("BatchAnnotateImagesResponse").unwrap()).clone()
    }
}

impl ::std::fmt::Display for BatchAnnotateImagesResponse {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for BatchAnnotateImagesResponse {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
// @@protoc_insertion_point(enum:vision.Likelihood)
pub enum Likelihood {
    // @@protoc_insertion_point(enum_value:vision.Likelihood.UNKNOWN)
    UNKNOWN = 0,
    // @@protoc_insertion_point(enum_value:vision.Likelihood.VERY_UNLIKELY)
    VERY_UNLIKELY = 1,
    // @@protoc_insertion_point(enum_value:vision.Likelihood.UNLIKELY)
    UNLIKELY = 2,
    // @@protoc_insertion_point(enum_value:vision.Likelihood.POSSIBLE)
    POSSIBLE = 3,
    // @@protoc_insertion_point(enum_value:vision.Likelihood.LIKELY)
    LIKELY = 4,
    // @@protoc_insertion_point(enum_value:vision.Likelihood.VERY_LIKELY)
    VERY_LIKELY = 5,
}

impl ::protobuf::Enum for Likelihood {
    const NAME: &'static str = "Likelihood";

    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<Likelihood> {
        match value {
            0 => ::std::option::Option::Some(Likelihood::UNKNOWN),
            1 => ::std::option::Option::Some(Likelihood::VERY_UNLIKELY),
            2 => ::std::option::Option::Some(Likelihood::UNLIKELY),
            3 => ::std::option::Option::Some(Likelihood::POSSIBLE),
            4 => ::std::option::Option::Some(Likelihood::LIKELY),
            5 => ::std::option::Option::Some(Likelihood::VERY_LIKELY),
            _ => ::std::option::Option::None
        }
    }

    fn from_str(str: &str) -> ::std::option::Option<Likelihood> {
        match str {
            "UNKNOWN" => ::std::option::Option::Some(Likelihood::UNKNOWN),
            "VERY_UNLIKELY" => ::std::option::Option::Some(Likelihood::VERY_UNLIKELY),
            "UNLIKELY" => ::std::option::Option::Some(Likelihood::UNLIKELY),
            "POSSIBLE" => ::std::option::Option::Some(Likelihood::POSSIBLE),
            "LIKELY" => ::std::option::Option::Some(Likelihood::LIKELY),
            "VERY_LIKELY" => ::std::option::Option::Some(Likelihood::VERY_LIKELY),
            _ => ::std::option::Option::None
        }
    }

    const VALUES: &'static [Likelihood] = &[
        Likelihood::UNKNOWN,
        Likelihood::VERY_UNLIKELY,
        Likelihood::UNLIKELY,
        Likelihood::POSSIBLE,
        Likelihood::LIKELY,
        Likelihood::VERY_LIKELY,
    ];
}

impl ::protobuf::EnumFull for Likelihood {
    fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().enum_by_package_relative_name("Likelihood").unwrap()).clone()
    }

    fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
        let index = *self as usize;
        Self::enum_descriptor().value_by_index(index)
    }
}

impl ::std::default::Default for Likelihood {
    fn default() -> Self {
        Likelihood::UNKNOWN
    }
}

impl Likelihood {
    fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
        ::protobuf::reflect::GeneratedEnumDescriptorData::new::<Likelihood>("Likelihood")
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x15image_annotator.proto\x12\x06vision\"\x8d\x02\n\x07Feature\x12(\n\
    \x04type\x18\x01\x20\x01(\x0e2\x14.vision.Feature.TypeR\x04type\x12\x1f\
    \n\x0bmax_results\x18\x02\x20\x01(\x05R\nmaxResults\"\xb6\x01\n\x04Type\
    \x12\x14\n\x10TYPE_UNSPECIFIED\x10\0\x12\x12\n\x0eFACE_DETECTION\x10\x01\
    \x12\x16\n\x12LANDMARK_DETECTION\x10\x02\x12\x12\n\x0eLOGO_DETECTION\x10\
    \x03\x12\x13\n\x0fLABEL_DETECTION\x10\x04\x12\x12\n\x0eTEXT_DETECTION\
    \x10\x05\x12\x19\n\x15SAFE_SEARCH_DETECTION\x10\x06\x12\x14\n\x10IMAGE_P\
    ROPERTIES\x10\x07\"1\n\x0bImageSource\x12\"\n\rgcs_image_uri\x18\x01\x20\
    \x01(\tR\x0bgcsImageUri\"N\n\x05Image\x12\x18\n\x07content\x18\x01\x20\
    \x01(\x0cR\x07content\x12+\n\x06source\x18\x02\x20\x01(\x0b2\x13.vision.\
    ImageSourceR\x06source\"h\n\x14AnnotateImageRequest\x12#\n\x05image\x18\
    \x01\x20\x01(\x0b2\r.vision.ImageR\x05image\x12+\n\x08features\x18\x02\
    \x20\x03(\x0b2\x0f.vision.FeatureR\x08features\"V\n\x1aBatchAnnotateImag\
    esRequest\x128\n\x08requests\x18\x01\x20\x03(\x0b2\x1c.vision.AnnotateIm\
    ageRequestR\x08requests\"$\n\x06Vertex\x12\x0c\n\x01x\x18\x01\x20\x01(\
    \x05R\x01x\x12\x0c\n\x01y\x18\x02\x20\x01(\x05R\x01y\":\n\x0cBoundingPol\
    y\x12*\n\x08vertices\x18\x01\x20\x03(\x0b2\x0e.vision.VertexR\x08vertice\
    s\"B\n\x06LatLng\x12\x1a\n\x08latitude\x18\x01\x20\x01(\x01R\x08latitude\
    \x12\x1c\n\tlongitude\x18\x02\x20\x01(\x01R\tlongitude\"7\n\x0cLocationI\
    nfo\x12'\n\x07lat_lng\x18\x01\x20\x01(\x0b2\x0e.vision.LatLngR\x06latLng\
    \"\xe3\x01\n\x10EntityAnnotation\x12\x10\n\x03mid\x18\x01\x20\x01(\tR\
    \x03mid\x12\x16\n\x06locale\x18\x02\x20\x01(\tR\x06locale\x12\x20\n\x0bd\
    escription\x18\x03\x20\x01(\tR\x0bdescription\x12\x14\n\x05score\x18\x04\
    \x20\x01(\x02R\x05score\x129\n\rbounding_poly\x18\x07\x20\x01(\x0b2\x14.\
    vision.BoundingPolyR\x0cboundingPoly\x122\n\tlocations\x18\x08\x20\x03(\
    \x0b2\x14.vision.LocationInfoR\tlocations\"\xa6\x06\n\x0eFaceAnnotation\
    \x129\n\rbounding_poly\x18\x01\x20\x01(\x0b2\x14.vision.BoundingPolyR\
    \x0cboundingPoly\x12>\n\x10fd_bounding_poly\x18\x02\x20\x01(\x0b2\x14.vi\
    sion.BoundingPolyR\x0efdBoundingPoly\x12\x1d\n\nroll_angle\x18\x04\x20\
    \x01(\x02R\trollAngle\x12\x1b\n\tpan_angle\x18\x05\x20\x01(\x02R\x08panA\
    ngle\x12\x1d\n\ntilt_angle\x18\x06\x20\x01(\x02R\ttiltAngle\x121\n\x14de\
    tection_confidence\x18\x07\x20\x01(\x02R\x13detectionConfidence\x125\n\
    \x16landmarking_confidence\x18\x08\x20\x01(\x02R\x15landmarkingConfidenc\
    e\x129\n\x0ejoy_likelihood\x18\t\x20\x01(\x0e2\x12.vision.LikelihoodR\rj\
    oyLikelihood\x12?\n\x11sorrow_likelihood\x18\n\x20\x01(\x0e2\x12.vision.\
    LikelihoodR\x10sorrowLikelihood\x12=\n\x10anger_likelihood\x18\x0b\x20\
    \x01(\x0e2\x12.vision.LikelihoodR\x0fangerLikelihood\x12C\n\x13surprise_\
    likelihood\x18\x0c\x20\x01(\x0e2\x12.vision.LikelihoodR\x12surpriseLikel\
    ihood\x12L\n\x18under_exposed_likelihood\x18\r\x20\x01(\x0e2\x12.vision.\
    LikelihoodR\x16underExposedLikelihood\x12A\n\x12blurred_likelihood\x18\
    \x0e\x20\x01(\x0e2\x12.vision.LikelihoodR\x11blurredLikelihood\x12C\n\
    \x13headwear_likelihood\x18\x0f\x20\x01(\x0e2\x12.vision.LikelihoodR\x12\
    headwearLikelihood\"\xc8\x01\n\x14SafeSearchAnnotation\x12(\n\x05adult\
    \x18\x01\x20\x01(\x0e2\x12.vision.LikelihoodR\x05adult\x12(\n\x05spoof\
    \x18\x02\x20\x01(\x0e2\x12.vision.LikelihoodR\x05spoof\x12,\n\x07medical\
    \x18\x03\x20\x01(\x0e2\x12.vision.LikelihoodR\x07medical\x12.\n\x08viole\
    nce\x18\x04\x20\x01(\x0e2\x12.vision.LikelihoodR\x08violence\"Y\n\x05Col\
    or\x12\x10\n\x03red\x18\x01\x20\x01(\x02R\x03red\x12\x14\n\x05green\x18\
    \x02\x20\x01(\x02R\x05green\x12\x12\n\x04blue\x18\x03\x20\x01(\x02R\x04b\
    lue\x12\x14\n\x05alpha\x18\x04\x20\x01(\x02R\x05alpha\"m\n\tColorInfo\
    \x12#\n\x05color\x18\x01\x20\x01(\x0b2\r.vision.ColorR\x05color\x12\x14\
    \n\x05score\x18\x02\x20\x01(\x02R\x05score\x12%\n\x0epixel_fraction\x18\
    \x03\x20\x01(\x02R\rpixelFraction\"E\n\x18DominantColorsAnnotation\x12)\
    \n\x06colors\x18\x01\x20\x03(\x0b2\x11.vision.ColorInfoR\x06colors\"\\\n\
    \x0fImageProperties\x12I\n\x0fdominant_colors\x18\x01\x20\x01(\x0b2\x20.\
    vision.DominantColorsAnnotationR\x0edominantColors\"6\n\x06Status\x12\
    \x12\n\x04code\x18\x01\x20\x01(\x05R\x04code\x12\x18\n\x07message\x18\
    \x02\x20\x01(\tR\x07message\"\xcb\x04\n\x15AnnotateImageResponse\x12A\n\
    \x10face_annotations\x18\x01\x20\x03(\x0b2\x16.vision.FaceAnnotationR\
    \x0ffaceAnnotations\x12K\n\x14landmark_annotations\x18\x02\x20\x03(\x0b2\
    \x18.vision.EntityAnnotationR\x13landmarkAnnotations\x12C\n\x10logo_anno\
    tations\x18\x03\x20\x03(\x0b2\x18.vision.EntityAnnotationR\x0flogoAnnota\
    tions\x12E\n\x11label_annotations\x18\x04\x20\x03(\x0b2\x18.vision.Entit\
    yAnnotationR\x10labelAnnotations\x12C\n\x10text_annotations\x18\x05\x20\
    \x03(\x0b2\x18.vision.EntityAnnotationR\x0ftextAnnotations\x12R\n\x16saf\
    e_search_annotation\x18\x06\x20\x01(\x0b2\x1c.vision.SafeSearchAnnotatio\
    nR\x14safeSearchAnnotation\x12W\n\x1bimage_properties_annotation\x18\x08\
    \x20\x01(\x0b2\x17.vision.ImagePropertiesR\x19imagePropertiesAnnotation\
    \x12$\n\x05error\x18\t\x20\x01(\x0b2\x0e.vision.StatusR\x05error\"Z\n\
    \x1bBatchAnnotateImagesResponse\x12;\n\tresponses\x18\x01\x20\x03(\x0b2\
    \x1d.vision.AnnotateImageResponseR\tresponses*e\n\nLikelihood\x12\x0b\n\
    \x07UNKNOWN\x10\0\x12\x11\n\rVERY_UNLIKELY\x10\x01\x12\x0c\n\x08UNLIKELY\
    \x10\x02\x12\x0c\n\x08POSSIBLE\x10\x03\x12\n\n\x06LIKELY\x10\x04\x12\x0f\
    \n\x0bVERY_LIKELY\x10\x052p\n\x0eImageAnnotator\x12^\n\x13BatchAnnotateI\
    mages\x12\".vision.BatchAnnotateImagesRequest\x1a#.vision.BatchAnnotateI\
    magesResponseb\x06proto3\
";

/// `FileDescriptorProto` object which was a source for this generated file
fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    static file_descriptor_proto_lazy: ::protobuf::rt::Lazy<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::Lazy::new();
    file_descriptor_proto_lazy.get(|| {
        ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
    })
}

/// `FileDescriptor` object which allows dynamic access to files
pub fn file_descriptor() -> &'static ::protobuf::reflect::FileDescriptor {
    static generated_file_descriptor_lazy: ::protobuf::rt::Lazy<::protobuf::reflect::GeneratedFileDescriptor> = ::protobuf::rt::Lazy::new();
    static file_descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::FileDescriptor> = ::protobuf::rt::Lazy::new();
    file_descriptor.get(|| {
        let generated_file_descriptor = generated_file_descriptor_lazy.get(|| {
            let mut deps = ::std::vec::Vec::with_capacity(0);
            let mut messages = ::std::vec::Vec::with_capacity(19);
            messages.push(Feature::generated_message_descriptor_data());
            messages.push(ImageSource::generated_message_descriptor_data());
            messages.push(Image::generated_message_descriptor_data());
            messages.push(AnnotateImageRequest::generated_message_descriptor_data());
            messages.push(BatchAnnotateImagesRequest::generated_message_descriptor_data());
            messages.push(Vertex::generated_message_descriptor_data());
            messages.push(BoundingPoly::generated_message_descriptor_data());
            messages.push(LatLng::generated_message_descriptor_data());
            messages.push(LocationInfo::generated_message_descriptor_data());
            messages.push(EntityAnnotation::generated_message_descriptor_data());
            messages.push(FaceAnnotation::generated_message_descriptor_data());
            messages.push(SafeSearchAnnotation::generated_message_descriptor_data());
            messages.push(Color::generated_message_descriptor_data());
            messages.push(ColorInfo::generated_message_descriptor_data());
            messages.push(DominantColorsAnnotation::generated_message_descriptor_data());
            messages.push(ImageProperties::generated_message_descriptor_data());
            messages.push(Status::generated_message_descriptor_data());
            messages.push(AnnotateImageResponse::generated_message_descriptor_data());
            messages.push(BatchAnnotateImagesResponse::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(2);
            enums.push(Likelihood::generated_enum_descriptor_data());
            enums.push(feature::Type::generated_enum_descriptor_data());
            ::protobuf::reflect::GeneratedFileDescriptor::new_generated(
                file_descriptor_proto(),
                deps,
                messages,
                enums,
            )
        });
        ::protobuf::reflect::FileDescriptor::new_generated_2(generated_file_descriptor)
    })
}
