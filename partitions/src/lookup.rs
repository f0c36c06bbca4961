use crate::thresholds::NUMBER_OF_SMALL_PARTITIONS;

/// p(n) for n < 128. p(127) = 3913864295 is the largest entry below 2^32.
pub(crate) static PARTITIONS_LOOKUP: [u32; NUMBER_OF_SMALL_PARTITIONS] = [
    1, 1, 2, 3, 5, 7, 11, 15,
    22, 30, 42, 56, 77, 101, 135, 176,
    231, 297, 385, 490, 627, 792, 1002, 1255,
    1575, 1958, 2436, 3010, 3718, 4565, 5604, 6842,
    8349, 10143, 12310, 14883, 17977, 21637, 26015, 31185,
    37338, 44583, 53174, 63261, 75175, 89134, 105558, 124754,
    147273, 173525, 204226, 239943, 281589, 329931, 386155, 451276,
    526823, 614154, 715220, 831820, 966467, 1121505, 1300156, 1505499,
    1741630, 2012558, 2323520, 2679689, 3087735, 3554345, 4087968, 4697205,
    5392783, 6185689, 7089500, 8118264, 9289091, 10619863, 12132164, 13848650,
    15796476, 18004327, 20506255, 23338469, 26543660, 30167357, 34262962, 38887673,
    44108109, 49995925, 56634173, 64112359, 72533807, 82010177, 92669720, 104651419,
    118114304, 133230930, 150198136, 169229875, 190569292, 214481126, 241265379, 271248950,
    304801365, 342325709, 384276336, 431149389, 483502844, 541946240, 607163746, 679903203,
    761002156, 851376628, 952050665, 1064144451, 1188908248, 1327710076, 1482074143, 1653668665,
    1844349560, 2056148051, 2291320912, 2552338241, 2841940500, 3163127352, 3519222692, 3913864295,
];

#[inline(always)]
pub(crate) fn lookup(n: usize) -> u32 {
    PARTITIONS_LOOKUP[n]
}
