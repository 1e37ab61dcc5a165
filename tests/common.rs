// Builders for synthesising CFF data in tests.
//
// Offsets in generated DICTs are always written as five byte integers so the size of a DICT does
// not depend on where the structures it points at end up.

/// Encode `n` as a DICT operand.
#[allow(dead_code)]
pub fn dict_int(n: i32) -> Vec<u8> {
    match n {
        -107..=107 => vec![(n + 139) as u8],
        108..=1131 => {
            let n = n - 108;
            vec![((n >> 8) + 247) as u8, (n & 0xFF) as u8]
        }
        -1131..=-108 => {
            let n = -n - 108;
            vec![((n >> 8) + 251) as u8, (n & 0xFF) as u8]
        }
        -32768..=32767 => {
            let [hi, lo] = (n as i16).to_be_bytes();
            vec![28, hi, lo]
        }
        _ => dict_offset(n).to_vec(),
    }
}

/// Encode `n` as a five byte DICT operand.
#[allow(dead_code)]
pub fn dict_offset(n: i32) -> [u8; 5] {
    let [b1, b2, b3, b4] = n.to_be_bytes();
    [29, b1, b2, b3, b4]
}

/// Serialise `objects` as an INDEX using the smallest offset size that fits.
#[allow(dead_code)]
pub fn index<T: AsRef<[u8]>>(objects: &[T]) -> Vec<u8> {
    let mut data = (objects.len() as u16).to_be_bytes().to_vec();
    if objects.is_empty() {
        return data;
    }

    let last_offset = objects.iter().map(|o| o.as_ref().len()).sum::<usize>() + 1;
    let off_size = match last_offset {
        0..=0xFF => 1,
        0x100..=0xFFFF => 2,
        0x10000..=0xFF_FFFF => 3,
        _ => 4,
    };
    data.push(off_size as u8);

    let mut offset = 1;
    let push_offset = |data: &mut Vec<u8>, offset: usize| {
        data.extend_from_slice(&(offset as u32).to_be_bytes()[4 - off_size..]);
    };
    push_offset(&mut data, offset);
    for object in objects {
        offset += object.as_ref().len();
        push_offset(&mut data, offset);
    }
    for object in objects {
        data.extend_from_slice(object.as_ref());
    }

    data
}

/// A Font DICT of a CID-keyed font along with its Private DICT.
#[allow(dead_code)]
#[derive(Clone, Debug, Default)]
pub struct FontDictBuilder {
    /// Raw Private DICT data. A `Subrs` entry is appended when `local_subrs` is not empty.
    pub private_dict: Vec<u8>,
    pub local_subrs: Vec<Vec<u8>>,
}

/// Builds a CFF font set holding a single font.
#[allow(dead_code)]
#[derive(Clone, Debug)]
pub struct CffBuilder {
    pub name: Vec<u8>,
    /// Raw Top DICT data, the offset operators are appended by `build`.
    pub top_dict: Vec<u8>,
    pub strings: Vec<Vec<u8>>,
    pub global_subrs: Vec<Vec<u8>>,
    pub char_strings: Vec<Vec<u8>>,
    pub private_dict: Vec<u8>,
    pub local_subrs: Vec<Vec<u8>>,
    pub charset: Option<Vec<u8>>,
    pub encoding: Option<Vec<u8>>,
    /// FDSelect data and Font DICTs, makes the font CID-keyed.
    pub cid: Option<(Vec<u8>, Vec<FontDictBuilder>)>,
}

#[allow(dead_code)]
#[derive(Default)]
struct Offsets {
    char_strings: i32,
    private: (i32, i32),
    charset: i32,
    encoding: i32,
    fd_array: i32,
    fd_select: i32,
}

#[allow(dead_code)]
impl CffBuilder {
    pub fn new(char_strings: Vec<Vec<u8>>) -> Self {
        CffBuilder {
            name: b"Test".to_vec(),
            top_dict: Vec::new(),
            strings: Vec::new(),
            global_subrs: Vec::new(),
            char_strings,
            private_dict: Vec::new(),
            local_subrs: Vec::new(),
            charset: None,
            encoding: None,
            cid: None,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = vec![1, 0, 4, 1];
        data.extend(index(&[&self.name]));

        let top_dict_len = self.top_dict_data(&Offsets::default()).len();
        let top_dict_index_len = index(&[vec![0u8; top_dict_len]]).len();
        let mut strings = self.strings.clone();
        if self.cid.is_some() {
            strings.push(b"Adobe".to_vec());
            strings.push(b"Identity".to_vec());
        }
        let string_index = index(&strings);
        let global_subr_index = index(&self.global_subrs);
        let body_start =
            data.len() + top_dict_index_len + string_index.len() + global_subr_index.len();

        let mut body = Vec::new();
        let pos = |body: &Vec<u8>| (body_start + body.len()) as i32;
        let mut offsets = Offsets::default();

        offsets.char_strings = pos(&body);
        body.extend(index(&self.char_strings));

        if let Some(charset) = &self.charset {
            offsets.charset = pos(&body);
            body.extend(charset);
        }

        if let Some(encoding) = &self.encoding {
            offsets.encoding = pos(&body);
            body.extend(encoding);
        }

        let private = private_dict_data(&self.private_dict, &self.local_subrs);
        offsets.private = (private.len() as i32, pos(&body));
        body.extend(private);
        if !self.local_subrs.is_empty() {
            body.extend(index(&self.local_subrs));
        }

        if let Some((fd_select, font_dicts)) = &self.cid {
            offsets.fd_select = pos(&body);
            body.extend(fd_select);

            let mut font_dict_data = Vec::new();
            for font_dict in font_dicts {
                let private = private_dict_data(&font_dict.private_dict, &font_dict.local_subrs);
                let mut dict = dict_offset(private.len() as i32).to_vec();
                dict.extend(dict_offset(pos(&body)));
                dict.push(18);
                font_dict_data.push(dict);

                body.extend(private);
                if !font_dict.local_subrs.is_empty() {
                    body.extend(index(&font_dict.local_subrs));
                }
            }

            offsets.fd_array = pos(&body);
            body.extend(index(&font_dict_data));
        }

        data.extend(index(&[self.top_dict_data(&offsets)]));
        data.extend(string_index);
        data.extend(global_subr_index);
        data.extend(body);
        data
    }

    fn top_dict_data(&self, offsets: &Offsets) -> Vec<u8> {
        let mut dict = self.top_dict.clone();
        if self.cid.is_some() {
            // Registry, Ordering, and Supplement: Adobe Identity 0
            let registry = 391 + self.strings.len() as i32;
            dict.extend(dict_int(registry));
            dict.extend(dict_int(registry + 1));
            dict.push(139);
            dict.extend([12, 30]);
        }

        dict.extend(dict_offset(offsets.char_strings));
        dict.push(17);
        dict.extend(dict_offset(offsets.private.0));
        dict.extend(dict_offset(offsets.private.1));
        dict.push(18);
        if self.charset.is_some() {
            dict.extend(dict_offset(offsets.charset));
            dict.push(15);
        }
        if self.encoding.is_some() {
            dict.extend(dict_offset(offsets.encoding));
            dict.push(16);
        }
        if self.cid.is_some() {
            dict.extend(dict_offset(offsets.fd_array));
            dict.extend([12, 36]);
            dict.extend(dict_offset(offsets.fd_select));
            dict.extend([12, 37]);
        }
        dict
    }
}

#[allow(dead_code)]
fn private_dict_data(private_dict: &[u8], local_subrs: &[Vec<u8>]) -> Vec<u8> {
    let mut data = private_dict.to_vec();
    if !local_subrs.is_empty() {
        // Local subrs immediately follow the Private DICT
        data.extend(dict_offset(data.len() as i32 + 6));
        data.push(19);
    }
    data
}

/// A token of a Type 2 charstring.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug)]
pub enum Cs {
    Int(i32),
    Fixed(f32),
    /// A one byte operator, or `1200 + b` for the two byte operator `12 b`.
    Op(u16),
    Raw(&'static [u8]),
}

/// Serialise a Type 2 charstring.
#[allow(dead_code)]
pub fn encode_char_string(tokens: &[Cs]) -> Vec<u8> {
    let mut data = Vec::new();
    for token in tokens {
        match *token {
            Cs::Int(n) => {
                assert!(i16::try_from(n).is_ok(), "{} is out of range", n);
                data.extend(dict_int(n));
            }
            Cs::Fixed(n) => {
                data.push(255);
                data.extend(((n * 65536.0) as i32).to_be_bytes());
            }
            Cs::Op(op) if op >= 1200 => data.extend([12, (op - 1200) as u8]),
            Cs::Op(op) => data.push(op as u8),
            Cs::Raw(bytes) => data.extend_from_slice(bytes),
        }
    }
    data
}
