// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{BaseElement, NUM_FULL_ROUNDS, NUM_PARTIAL_ROUNDS, STATE_WIDTH};

// ROUND CONSTANTS
// ================================================================================================

/// Total number of round constants: one vector for the initial key addition, one vector for each
/// of the first half of full rounds, a single scalar for each partial round, and one vector for
/// each of the second half of full rounds except the very last one.
pub(super) const NUM_ROUND_CONSTANTS: usize =
    (NUM_FULL_ROUNDS + 1) * STATE_WIDTH + NUM_PARTIAL_ROUNDS - STATE_WIDTH;

/// Poseidon round constants in the optimized layout.
///
/// The constants were derived from the plonky2 Poseidon round constants for width 12 (sampled
/// with ChaCha8 seeded with 0) by pushing the constants of the partial rounds backwards through
/// the MDS matrix, so that every partial round only needs a single scalar constant for lane 0.
pub(super) const ROUND_CONSTANTS: [BaseElement; NUM_ROUND_CONSTANTS] = [
    BaseElement::new(13080132714287612933),
    BaseElement::new(8594738767457295063),
    BaseElement::new(12896916465481390516),
    BaseElement::new(1109962092811921367),
    BaseElement::new(16216730422861946898),
    BaseElement::new(10137062673499593713),
    BaseElement::new(15292064466732465823),
    BaseElement::new(17255573294985989181),
    BaseElement::new(14827154241873003558),
    BaseElement::new(2846171647972703231),
    BaseElement::new(16246264663680317601),
    BaseElement::new(14214208087951879286),
    BaseElement::new(12424477181648362849),
    BaseElement::new(16179338556091667078),
    BaseElement::new(9312809152362877006),
    BaseElement::new(14713316472656818549),
    BaseElement::new(8272756834836418434),
    BaseElement::new(9318185477193590593),
    BaseElement::new(12759309574015080046),
    BaseElement::new(560379108441676450),
    BaseElement::new(11879773570817046191),
    BaseElement::new(15220774051455487973),
    BaseElement::new(14205216488576553252),
    BaseElement::new(5064302316483822381),
    BaseElement::new(14774584837798776620),
    BaseElement::new(12515618960765609190),
    BaseElement::new(13763317788636382516),
    BaseElement::new(12820402144046823459),
    BaseElement::new(15771487403568421389),
    BaseElement::new(7860456779899281594),
    BaseElement::new(17328433181129372033),
    BaseElement::new(6233919799582985702),
    BaseElement::new(3587763586990827704),
    BaseElement::new(1133450777484277178),
    BaseElement::new(11329540070616899082),
    BaseElement::new(5703342807882711189),
    BaseElement::new(7675481020287789244),
    BaseElement::new(7546415616275668089),
    BaseElement::new(4766502079322959994),
    BaseElement::new(2946374511516156560),
    BaseElement::new(4242352140849466689),
    BaseElement::new(8309209841313695338),
    BaseElement::new(16771964669162783900),
    BaseElement::new(16286331351794534085),
    BaseElement::new(10244479597532154963),
    BaseElement::new(12405166074450302092),
    BaseElement::new(10706424794017005776),
    BaseElement::new(17540989511931260755),
    BaseElement::new(9989929105235131396),
    BaseElement::new(14934681398877691660),
    BaseElement::new(11833998062852619641),
    BaseElement::new(249252520407566092),
    BaseElement::new(5384421570160989950),
    BaseElement::new(14907948012529875747),
    BaseElement::new(12434903733750383963),
    BaseElement::new(10480908243380473133),
    BaseElement::new(12592568438535835909),
    BaseElement::new(6319379877476048458),
    BaseElement::new(10768178556598784198),
    BaseElement::new(7412964229345042271),
    BaseElement::new(3557672134543368378),
    BaseElement::new(17510162019322084593),
    BaseElement::new(17644764963992462830),
    BaseElement::new(3630476108428225872),
    BaseElement::new(5292148904077063214),
    BaseElement::new(1528152877738289709),
    BaseElement::new(14713650861728735204),
    BaseElement::new(3335394872607449149),
    BaseElement::new(4948398930051390601),
    BaseElement::new(20778448483574620),
    BaseElement::new(6047356269798984186),
    BaseElement::new(15188878789059762786),
    BaseElement::new(13892640642767782997),
    BaseElement::new(290009250793850344),
    BaseElement::new(1623956352939310700),
    BaseElement::new(11276710773545861570),
    BaseElement::new(4077010817722783650),
    BaseElement::new(12811345911919104941),
    BaseElement::new(4733229113250879718),
    BaseElement::new(8932962300743964361),
    BaseElement::new(434643814383073416),
    BaseElement::new(10095444296107910092),
    BaseElement::new(13071245426661561462),
    BaseElement::new(3027171024356423075),
    BaseElement::new(7682376703494283357),
    BaseElement::new(9947659225400103346),
    BaseElement::new(8501781622434581204),
    BaseElement::new(12515186142957709533),
    BaseElement::new(2547850508375398030),
    BaseElement::new(12160577650071910645),
    BaseElement::new(6083002469851577592),
    BaseElement::new(11198456386600353061),
    BaseElement::new(4602538602696229947),
    BaseElement::new(10577287748558543429),
    BaseElement::new(8508213308621050367),
    BaseElement::new(4589446555379255314),
    BaseElement::new(17390972768916165375),
    BaseElement::new(3378414043247208569),
    BaseElement::new(15613846132371940953),
    BaseElement::new(9625806314748534410),
    BaseElement::new(146047852359862194),
    BaseElement::new(16213424196570197911),
    BaseElement::new(17641990210578467222),
    BaseElement::new(1836039457143961154),
    BaseElement::new(10163561204816917659),
    BaseElement::new(11973536136083679178),
    BaseElement::new(2182015631329184718),
    BaseElement::new(7733935276691703019),
    BaseElement::new(15028028520049584206),
    BaseElement::new(12867360867154942039),
    BaseElement::new(2237398237026319554),
    BaseElement::new(11070105205281240315),
    BaseElement::new(13990187074229552445),
    BaseElement::new(8134950732046988201),
    BaseElement::new(13731318896064705469),
    BaseElement::new(17973782115561220854),
    BaseElement::new(9194790600485881543),
    BaseElement::new(14747692593011746469),
];

// MDS
// ================================================================================================

/// Poseidon MDS matrix applied as `state * MDS`, that is `MDS[j][i]` is the coefficient of
/// input lane `j` in output lane `i`.
///
/// This is the transpose of the circulant matrix with first row
/// [17, 15, 41, 16, 2, 28, 13, 13, 39, 18, 34, 20] plus a diagonal of [8, 0, ..., 0].
pub(super) const MDS: [[BaseElement; STATE_WIDTH]; STATE_WIDTH] = [
    [
        BaseElement::new(25),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
    ],
    [
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
    ],
    [
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
    ],
    [
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
    ],
    [
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
    ],
    [
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
    ],
    [
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
    ],
    [
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
    ],
    [
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
    ],
    [
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
        BaseElement::new(34),
    ],
    [
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
        BaseElement::new(20),
    ],
    [
        BaseElement::new(20),
        BaseElement::new(34),
        BaseElement::new(18),
        BaseElement::new(39),
        BaseElement::new(13),
        BaseElement::new(13),
        BaseElement::new(28),
        BaseElement::new(2),
        BaseElement::new(16),
        BaseElement::new(41),
        BaseElement::new(15),
        BaseElement::new(17),
    ],
];

/// Matrix applied in the last full round before the partial rounds, in place of [MDS].
///
/// This is [MDS] followed by the dense factor left over from decomposing the MDS matrix of every
/// partial round into a sparse matrix.
pub(super) const PRE_SPARSE_MDS: [[BaseElement; STATE_WIDTH]; STATE_WIDTH] = [
    [
        BaseElement::new(25),
        BaseElement::new(8671226093706724816),
        BaseElement::new(15848798551994695460),
        BaseElement::new(13015451698937549374),
        BaseElement::new(5074870026200809173),
        BaseElement::new(472211821368306750),
        BaseElement::new(13087354898195766648),
        BaseElement::new(14965528151684576593),
        BaseElement::new(2325209896866870745),
        BaseElement::new(18127960229136961293),
        BaseElement::new(8263947870434566479),
        BaseElement::new(16424417743239903117),
    ],
    [
        BaseElement::new(15),
        BaseElement::new(9330289267057807797),
        BaseElement::new(9340232619422804767),
        BaseElement::new(8817192339918481734),
        BaseElement::new(8250253968460462961),
        BaseElement::new(6943005558892581617),
        BaseElement::new(6470763184139258170),
        BaseElement::new(7406374861035863352),
        BaseElement::new(16954940864105539893),
        BaseElement::new(1727447305799822127),
        BaseElement::new(11199978817235310712),
        BaseElement::new(8047309336498597505),
    ],
    [
        BaseElement::new(41),
        BaseElement::new(15161127678545795060),
        BaseElement::new(3296933780491859011),
        BaseElement::new(18058784549118488186),
        BaseElement::new(16008613421663246659),
        BaseElement::new(16644726112790977433),
        BaseElement::new(3982032525788044282),
        BaseElement::new(12032977102296127079),
        BaseElement::new(3191106414122494552),
        BaseElement::new(16815333449058504837),
        BaseElement::new(10950986084984729061),
        BaseElement::new(11199978817235310712),
    ],
    [
        BaseElement::new(16),
        BaseElement::new(6972485630072864522),
        BaseElement::new(15810244529168543889),
        BaseElement::new(4052632175996667015),
        BaseElement::new(16163033776062476380),
        BaseElement::new(15319553506423853670),
        BaseElement::new(5053718162793963685),
        BaseElement::new(7190392206320117863),
        BaseElement::new(9350685135056492179),
        BaseElement::new(7128281242665235452),
        BaseElement::new(16815333449058504837),
        BaseElement::new(1727447305799822127),
    ],
    [
        BaseElement::new(2),
        BaseElement::new(12150416210185823010),
        BaseElement::new(8629355742752037352),
        BaseElement::new(3093014289665371861),
        BaseElement::new(13190961887613941855),
        BaseElement::new(8964085706450307019),
        BaseElement::new(4120839180303332948),
        BaseElement::new(13269794761731281344),
        BaseElement::new(11879088115699214223),
        BaseElement::new(9350685135056492179),
        BaseElement::new(3191106414122494552),
        BaseElement::new(16954940864105539893),
    ],
    [
        BaseElement::new(28),
        BaseElement::new(7084432631283352551),
        BaseElement::new(12308660339132043015),
        BaseElement::new(9944167640055817604),
        BaseElement::new(14354365654672542476),
        BaseElement::new(12799251180030091675),
        BaseElement::new(9829206581724110801),
        BaseElement::new(18159332188973921016),
        BaseElement::new(13269794761731281344),
        BaseElement::new(7190392206320117863),
        BaseElement::new(12032977102296127079),
        BaseElement::new(7406374861035863352),
    ],
    [
        BaseElement::new(13),
        BaseElement::new(16242913881871852359),
        BaseElement::new(1428510676744777460),
        BaseElement::new(6304481418022946333),
        BaseElement::new(2479880097846473069),
        BaseElement::new(3707310604355361478),
        BaseElement::new(4908706127957831095),
        BaseElement::new(9829206581724110801),
        BaseElement::new(4120839180303332948),
        BaseElement::new(5053718162793963685),
        BaseElement::new(3982032525788044282),
        BaseElement::new(6470763184139258170),
    ],
    [
        BaseElement::new(13),
        BaseElement::new(17048147774400113669),
        BaseElement::new(16279604190570612294),
        BaseElement::new(10767328853239586916),
        BaseElement::new(7922345352441862388),
        BaseElement::new(17620766862232317513),
        BaseElement::new(3707310604355361478),
        BaseElement::new(12799251180030091675),
        BaseElement::new(8964085706450307019),
        BaseElement::new(15319553506423853670),
        BaseElement::new(16644726112790977433),
        BaseElement::new(6943005558892581617),
    ],
    [
        BaseElement::new(39),
        BaseElement::new(4393195069014065718),
        BaseElement::new(11412904134894996235),
        BaseElement::new(16285788637330037494),
        BaseElement::new(9374105674950115177),
        BaseElement::new(7922345352441862388),
        BaseElement::new(2479880097846473069),
        BaseElement::new(14354365654672542476),
        BaseElement::new(13190961887613941855),
        BaseElement::new(16163033776062476380),
        BaseElement::new(16008613421663246659),
        BaseElement::new(8250253968460462961),
    ],
    [
        BaseElement::new(18),
        BaseElement::new(13002017499772835811),
        BaseElement::new(10240592002762434310),
        BaseElement::new(1074020848297325697),
        BaseElement::new(16285788637330037494),
        BaseElement::new(10767328853239586916),
        BaseElement::new(6304481418022946333),
        BaseElement::new(9944167640055817604),
        BaseElement::new(3093014289665371861),
        BaseElement::new(4052632175996667015),
        BaseElement::new(18058784549118488186),
        BaseElement::new(8817192339918481734),
    ],
    [
        BaseElement::new(34),
        BaseElement::new(12311497675990542816),
        BaseElement::new(14815700094395637722),
        BaseElement::new(10240592002762434310),
        BaseElement::new(11412904134894996235),
        BaseElement::new(16279604190570612294),
        BaseElement::new(1428510676744777460),
        BaseElement::new(12308660339132043015),
        BaseElement::new(8629355742752037352),
        BaseElement::new(15810244529168543889),
        BaseElement::new(3296933780491859011),
        BaseElement::new(9340232619422804767),
    ],
    [
        BaseElement::new(20),
        BaseElement::new(3672877435765292345),
        BaseElement::new(12311497675990542816),
        BaseElement::new(13002017499772835811),
        BaseElement::new(4393195069014065718),
        BaseElement::new(17048147774400113669),
        BaseElement::new(16242913881871852359),
        BaseElement::new(7084432631283352551),
        BaseElement::new(12150416210185823010),
        BaseElement::new(6972485630072864522),
        BaseElement::new(15161127678545795060),
        BaseElement::new(9330289267057807797),
    ],
];

// SPARSE MATRICES
// ================================================================================================

/// Number of coefficients describing the sparse matrix of a single partial round.
pub(super) const SPARSE_ROUND_WIDTH: usize = 2 * STATE_WIDTH - 1;

pub(super) const NUM_SPARSE_COEFFICIENTS: usize = NUM_PARTIAL_ROUNDS * SPARSE_ROUND_WIDTH;

/// Sparse matrices of the partial rounds, 23 coefficients per round.
///
/// The first 12 coefficients of a round form the first row of the matrix (lane 0 of the new
/// state is their inner product with the whole state); the remaining 11 form the first column
/// below the diagonal (lane i >= 1 of the new state is lane i plus the coefficient times lane 0).
pub(super) const SPARSE_COEFFICIENTS: [BaseElement; NUM_SPARSE_COEFFICIENTS] = [
    BaseElement::new(25),
    BaseElement::new(4438751076270498736),
    BaseElement::new(9317528645525775657),
    BaseElement::new(2603614750616077704),
    BaseElement::new(9834445229934519080),
    BaseElement::new(11955300617986087719),
    BaseElement::new(13674383287779636394),
    BaseElement::new(7242667852302110551),
    BaseElement::new(703710881370165964),
    BaseElement::new(5061939192123688976),
    BaseElement::new(14416184509556335938),
    BaseElement::new(304868360577598380),
    BaseElement::new(10702656082108580291),
    BaseElement::new(14323272843908492221),
    BaseElement::new(15449530374849795087),
    BaseElement::new(839422581341380592),
    BaseElement::new(11044529172588201887),
    BaseElement::new(9218907426627144627),
    BaseElement::new(16863852725141286670),
    BaseElement::new(12378944184369265821),
    BaseElement::new(4291107264489923137),
    BaseElement::new(18105902022777689401),
    BaseElement::new(4532874245444204412),
    BaseElement::new(25),
    BaseElement::new(7437226027186543243),
    BaseElement::new(15353050892319980048),
    BaseElement::new(3199984117275729523),
    BaseElement::new(11990763268329609629),
    BaseElement::new(5577680852675862792),
    BaseElement::new(17892201254274048377),
    BaseElement::new(4681998189446302081),
    BaseElement::new(6822112447852802370),
    BaseElement::new(7318824523402736059),
    BaseElement::new(63486289239724471),
    BaseElement::new(9953444262837494154),
    BaseElement::new(783331064993138470),
    BaseElement::new(11780280264626300249),
    BaseElement::new(14317347280917240576),
    BaseElement::new(7639896796391275580),
    BaseElement::new(5524721098652169327),
    BaseElement::new(4647621086109661393),
    BaseElement::new(551557749415629519),
    BaseElement::new(4774730083352601242),
    BaseElement::new(9878226461889807280),
    BaseElement::new(2796688701546052437),
    BaseElement::new(3152254583822593203),
    BaseElement::new(25),
    BaseElement::new(2317103059171007623),
    BaseElement::new(16480286982765085951),
    BaseElement::new(13705213611198486247),
    BaseElement::new(10236515677047503770),
    BaseElement::new(6341681382391377123),
    BaseElement::new(6362787076607341484),
    BaseElement::new(10057473295910894055),
    BaseElement::new(12586789805515730111),
    BaseElement::new(4352300357074435274),
    BaseElement::new(15739906440350539774),
    BaseElement::new(16786966705537008710),
    BaseElement::new(5195684422952000615),
    BaseElement::new(16386310079584461432),
    BaseElement::new(8354845848262314988),
    BaseElement::new(6700373425673846218),
    BaseElement::new(14613275276996917774),
    BaseElement::new(15810393896142816349),
    BaseElement::new(8919907675614209581),
    BaseElement::new(4378937399360000942),
    BaseElement::new(3921314266986613083),
    BaseElement::new(3157453341478075556),
    BaseElement::new(12056705871081879759),
    BaseElement::new(25),
    BaseElement::new(14247238213840877673),
    BaseElement::new(4982197628621364471),
    BaseElement::new(1650209613801527344),
    BaseElement::new(16334009413005742380),
    BaseElement::new(320004518447392347),
    BaseElement::new(7777559975827687149),
    BaseElement::new(1266186313330142639),
    BaseElement::new(12735743610080455214),
    BaseElement::new(9621059894918028247),
    BaseElement::new(4350447204024668858),
    BaseElement::new(11420240845800225374),
    BaseElement::new(12838957912943317144),
    BaseElement::new(11392036161259909092),
    BaseElement::new(5420611346845318460),
    BaseElement::new(11418874531271499277),
    BaseElement::new(14582096517505941837),
    BaseElement::new(877280106856758747),
    BaseElement::new(11091271673331452926),
    BaseElement::new(9617340340155417663),
    BaseElement::new(9043411348035541157),
    BaseElement::new(16964047224456307403),
    BaseElement::new(10338102439110648229),
    BaseElement::new(25),
    BaseElement::new(1701204778899409548),
    BaseElement::new(12463216732586668885),
    BaseElement::new(7392209094895994703),
    BaseElement::new(15680934805691729401),
    BaseElement::new(14004357016008534075),
    BaseElement::new(14936251243935649556),
    BaseElement::new(1522896783411827638),
    BaseElement::new(13858466054557097275),
    BaseElement::new(3172936841377972450),
    BaseElement::new(1068421630679369146),
    BaseElement::new(14424837255543781072),
    BaseElement::new(1277502887239453738),
    BaseElement::new(11492475458589769996),
    BaseElement::new(12115111105137538533),
    BaseElement::new(6007394463725400498),
    BaseElement::new(4633777909023327008),
    BaseElement::new(12045217224929432404),
    BaseElement::new(5600645681481758769),
    BaseElement::new(13058511211226185597),
    BaseElement::new(10831228388201534917),
    BaseElement::new(10765285645335338967),
    BaseElement::new(12314041551985486068),
    BaseElement::new(25),
    BaseElement::new(10714170731680699852),
    BaseElement::new(5765613494791770423),
    BaseElement::new(9663820292401160995),
    BaseElement::new(397172480378586284),
    BaseElement::new(4280709209124899452),
    BaseElement::new(1203358955785565947),
    BaseElement::new(11202700275482992172),
    BaseElement::new(13685583713509618195),
    BaseElement::new(3469864161577330170),
    BaseElement::new(8734130268423889220),
    BaseElement::new(16917450195693745928),
    BaseElement::new(4032097614937144430),
    BaseElement::new(5682426829072761065),
    BaseElement::new(14144004233890775432),
    BaseElement::new(11476034762570105656),
    BaseElement::new(11441392943423295273),
    BaseElement::new(14245661866930276468),
    BaseElement::new(11536287954985758398),
    BaseElement::new(6483617259986966714),
    BaseElement::new(10087111781120039554),
    BaseElement::new(13728844829744097141),
    BaseElement::new(14679689325173586623),
    BaseElement::new(25),
    BaseElement::new(8180410513952497551),
    BaseElement::new(7071292797447000945),
    BaseElement::new(14180677607572215618),
    BaseElement::new(6192821375005245090),
    BaseElement::new(11618722403488968531),
    BaseElement::new(16359132914868028498),
    BaseElement::new(629739239384523563),
    BaseElement::new(14807849520380455651),
    BaseElement::new(9453790714124186574),
    BaseElement::new(13094671554168529902),
    BaseElement::new(7712187332553607807),
    BaseElement::new(6304928008866363842),
    BaseElement::new(9855321538770560945),
    BaseElement::new(9435164398075715846),
    BaseElement::new(9404592978128123150),
    BaseElement::new(11002422368171462947),
    BaseElement::new(8486311906590791617),
    BaseElement::new(18361824531704888434),
    BaseElement::new(2798920999004265189),
    BaseElement::new(17909793464802401204),
    BaseElement::new(5756303597132403312),
    BaseElement::new(5858421860645672190),
    BaseElement::new(25),
    BaseElement::new(17023513964361815961),
    BaseElement::new(4047391151444874101),
    BaseElement::new(4322167285472126322),
    BaseElement::new(5857702128726293638),
    BaseElement::new(5139199894843344198),
    BaseElement::new(1693515656102034708),
    BaseElement::new(12470471516364544231),
    BaseElement::new(8323866952084077697),
    BaseElement::new(12651873977826689095),
    BaseElement::new(5067670011142229746),
    BaseElement::new(396279522907796927),
    BaseElement::new(17305709116193116427),
    BaseElement::new(735829306202841815),
    BaseElement::new(14847743950994388316),
    BaseElement::new(11139080626411756670),
    BaseElement::new(7092455469264931963),
    BaseElement::new(11583767394161657005),
    BaseElement::new(15774934118411863340),
    BaseElement::new(4416857554682544229),
    BaseElement::new(9159855784268361426),
    BaseElement::new(8216101670692368083),
    BaseElement::new(16367782717227750410),
    BaseElement::new(25),
    BaseElement::new(16390401751368131934),
    BaseElement::new(7418420403566340092),
    BaseElement::new(8653653352406274042),
    BaseElement::new(4118931406823846491),
    BaseElement::new(82975984786450442),
    BaseElement::new(18222397316657226499),
    BaseElement::new(2002174628128864983),
    BaseElement::new(9634468324007960767),
    BaseElement::new(3259584970126823840),
    BaseElement::new(581370729274350312),
    BaseElement::new(17755967144133734705),
    BaseElement::new(12329937970340684597),
    BaseElement::new(10602297383654186753),
    BaseElement::new(5891764497626072293),
    BaseElement::new(10671154149112267313),
    BaseElement::new(18234822653119242373),
    BaseElement::new(15287378323692558105),
    BaseElement::new(9967103142034849899),
    BaseElement::new(15861939895842675328),
    BaseElement::new(11730063476303470848),
    BaseElement::new(1586390848658847158),
    BaseElement::new(1015360682565850373),
    BaseElement::new(25),
    BaseElement::new(9071247654034188589),
    BaseElement::new(6594541173975452315),
    BaseElement::new(17782188089785283344),
    BaseElement::new(3595742487221932055),
    BaseElement::new(9841642201692265487),
    BaseElement::new(1029671011456985627),
    BaseElement::new(13457875495926821529),
    BaseElement::new(6870405007338730846),
    BaseElement::new(12744130097658441846),
    BaseElement::new(6788288399186088634),
    BaseElement::new(357912856529587295),
    BaseElement::new(4417656488067463062),
    BaseElement::new(14987770745080868386),
    BaseElement::new(4702825855063868377),
    BaseElement::new(2465246157933796197),
    BaseElement::new(8034369030882576822),
    BaseElement::new(15698764330557579947),
    BaseElement::new(11839103375501390181),
    BaseElement::new(4595990697051972631),
    BaseElement::new(14148213542088135280),
    BaseElement::new(14849248616009699298),
    BaseElement::new(15807262764748562013),
    BaseElement::new(25),
    BaseElement::new(5607434777391338218),
    BaseElement::new(15814876086124552425),
    BaseElement::new(10566177234457318078),
    BaseElement::new(15354864780205183334),
    BaseElement::new(15216311397122257089),
    BaseElement::new(2674093911898978557),
    BaseElement::new(16268280753066444837),
    BaseElement::new(3675451000502615243),
    BaseElement::new(701273502091366776),
    BaseElement::new(15854278682598134666),
    BaseElement::new(6924615965242507246),
    BaseElement::new(1262098398535043837),
    BaseElement::new(2436065499532941641),
    BaseElement::new(1138970283407778564),
    BaseElement::new(1825502889302643134),
    BaseElement::new(5500855066099563465),
    BaseElement::new(11666892062115297604),
    BaseElement::new(13463068267332421729),
    BaseElement::new(17516970128403465337),
    BaseElement::new(11088428730628824449),
    BaseElement::new(4615288675764694853),
    BaseElement::new(16220123440754855385),
    BaseElement::new(25),
    BaseElement::new(1637471090675303584),
    BaseElement::new(4375318637115686030),
    BaseElement::new(12136810621975340177),
    BaseElement::new(105995675382122926),
    BaseElement::new(5987457663538146171),
    BaseElement::new(15717760330284389791),
    BaseElement::new(14670439359715404205),
    BaseElement::new(5464349733274908045),
    BaseElement::new(8636933789572244554),
    BaseElement::new(9769580318971544573),
    BaseElement::new(9102363839782539970),
    BaseElement::new(9570691013274316785),
    BaseElement::new(15613851939195720118),
    BaseElement::new(3699802456427549428),
    BaseElement::new(14363933592354809237),
    BaseElement::new(13863573127618181752),
    BaseElement::new(11428524752427198786),
    BaseElement::new(1512236798846210343),
    BaseElement::new(15492557605200192531),
    BaseElement::new(4471766256042329601),
    BaseElement::new(12055723375080267479),
    BaseElement::new(16720313860519281958),
    BaseElement::new(25),
    BaseElement::new(13571765139831017037),
    BaseElement::new(818883284762741475),
    BaseElement::new(11800681286871024320),
    BaseElement::new(4228007315495729552),
    BaseElement::new(9681067057645014410),
    BaseElement::new(10160317193366865607),
    BaseElement::new(7974952474492003064),
    BaseElement::new(311630947502800583),
    BaseElement::new(16977972518193735910),
    BaseElement::new(615971843838204966),
    BaseElement::new(17678304266887460895),
    BaseElement::new(2561042796132833389),
    BaseElement::new(10464014529858294964),
    BaseElement::new(14401165907148431066),
    BaseElement::new(2413453332765052361),
    BaseElement::new(14620959153325857181),
    BaseElement::new(16368665425253279930),
    BaseElement::new(8913590094823920770),
    BaseElement::new(4357291993877750483),
    BaseElement::new(18315259589408480902),
    BaseElement::new(7040130461852977952),
    BaseElement::new(16913088801316332783),
    BaseElement::new(25),
    BaseElement::new(12163901532241384359),
    BaseElement::new(5826724299253731684),
    BaseElement::new(17423022063725297026),
    BaseElement::new(18082834829462388363),
    BaseElement::new(10626880031407069622),
    BaseElement::new(1952478840402025861),
    BaseElement::new(9036125440908740987),
    BaseElement::new(1042941967034175129),
    BaseElement::new(13710136024884221835),
    BaseElement::new(3995229588248274477),
    BaseElement::new(11993482789377134210),
    BaseElement::new(15483762529902925134),
    BaseElement::new(17034733783218795199),
    BaseElement::new(18136305076967260316),
    BaseElement::new(15896912869485945382),
    BaseElement::new(475392759889361288),
    BaseElement::new(1823867867187688822),
    BaseElement::new(8817375076608676110),
    BaseElement::new(8857453095514132937),
    BaseElement::new(17995601973761478278),
    BaseElement::new(18042919419769033432),
    BaseElement::new(17356815683605755783),
    BaseElement::new(25),
    BaseElement::new(12697151891341221277),
    BaseElement::new(13408757364964309332),
    BaseElement::new(14636730641620356003),
    BaseElement::new(2917199062768996165),
    BaseElement::new(11768157571822112934),
    BaseElement::new(15407074889369976729),
    BaseElement::new(3320959039775894817),
    BaseElement::new(16277817307991958146),
    BaseElement::new(7362033657200491320),
    BaseElement::new(9990801137147894185),
    BaseElement::new(14676096006818979429),
    BaseElement::new(853567178463642200),
    BaseElement::new(781481719657018312),
    BaseElement::new(864881582238738022),
    BaseElement::new(776585443674182031),
    BaseElement::new(868289454518583667),
    BaseElement::new(873991676947315745),
    BaseElement::new(825112067366636056),
    BaseElement::new(904067466148006484),
    BaseElement::new(864277137123579536),
    BaseElement::new(785755357347442049),
    BaseElement::new(861609966041484849),
    BaseElement::new(25),
    BaseElement::new(17204396082766500862),
    BaseElement::new(14458712079049372979),
    BaseElement::new(17287567422807715153),
    BaseElement::new(13337198174858709409),
    BaseElement::new(7624105753184612060),
    BaseElement::new(17074874386857691157),
    BaseElement::new(2909991590741947335),
    BaseElement::new(14770785872198722410),
    BaseElement::new(17719065353010659993),
    BaseElement::new(14898159957685527729),
    BaseElement::new(12135206555549668255),
    BaseElement::new(3644417860664408),
    BaseElement::new(3335591043919560),
    BaseElement::new(3691922388548390),
    BaseElement::new(3315658209334511),
    BaseElement::new(3706319247139923),
    BaseElement::new(3730913850857153),
    BaseElement::new(3522914930316824),
    BaseElement::new(3859199185371348),
    BaseElement::new(3689373458353040),
    BaseElement::new(3354664939836449),
    BaseElement::new(3677753419960785),
    BaseElement::new(25),
    BaseElement::new(15626888021543284549),
    BaseElement::new(12464927884746769804),
    BaseElement::new(1471467344747928256),
    BaseElement::new(11413582290460358915),
    BaseElement::new(9282109700482247280),
    BaseElement::new(17976144115670124039),
    BaseElement::new(16456828278798000758),
    BaseElement::new(1008181782916845414),
    BaseElement::new(17610348098917415827),
    BaseElement::new(204173067177706516),
    BaseElement::new(15964669298669259045),
    BaseElement::new(15551163980504),
    BaseElement::new(14240130616264),
    BaseElement::new(15771333781862),
    BaseElement::new(14149230256207),
    BaseElement::new(15820017123763),
    BaseElement::new(15936503968609),
    BaseElement::new(15031975505304),
    BaseElement::new(16471548413268),
    BaseElement::new(15760188783376),
    BaseElement::new(14317015483073),
    BaseElement::new(15696239618801),
    BaseElement::new(25),
    BaseElement::new(13932676290161493411),
    BaseElement::new(14699132604785301972),
    BaseElement::new(3744215611852980773),
    BaseElement::new(2709414263278899107),
    BaseElement::new(806263865491310800),
    BaseElement::new(7317365142041602481),
    BaseElement::new(16776386564962992796),
    BaseElement::new(11652640766067723448),
    BaseElement::new(1016370456237928832),
    BaseElement::new(961864172302955643),
    BaseElement::new(11539305592151691719),
    BaseElement::new(66326084760),
    BaseElement::new(60935297352),
    BaseElement::new(67215299046),
    BaseElement::new(60348857903),
    BaseElement::new(67671686739),
    BaseElement::new(67914356993),
    BaseElement::new(64112320984),
    BaseElement::new(70469953364),
    BaseElement::new(67111186256),
    BaseElement::new(61118430945),
    BaseElement::new(67182327505),
    BaseElement::new(25),
    BaseElement::new(5260886902259565990),
    BaseElement::new(16171862215293778203),
    BaseElement::new(771114262717812991),
    BaseElement::new(10575516421403467499),
    BaseElement::new(13137658605724015568),
    BaseElement::new(4324696043571725046),
    BaseElement::new(17177140657993423090),
    BaseElement::new(11675287481120654357),
    BaseElement::new(215782959819461329),
    BaseElement::new(16817340479494209298),
    BaseElement::new(2305466969888960689),
    BaseElement::new(286463800),
    BaseElement::new(257349000),
    BaseElement::new(285544326),
    BaseElement::new(260345679),
    BaseElement::new(286599123),
    BaseElement::new(289630625),
    BaseElement::new(275722040),
    BaseElement::new(300075668),
    BaseElement::new(285878768),
    BaseElement::new(262796737),
    BaseElement::new(284566993),
    BaseElement::new(25),
    BaseElement::new(9354449820649144563),
    BaseElement::new(17638200638691477463),
    BaseElement::new(17096907883840532417),
    BaseElement::new(795566415402858691),
    BaseElement::new(12763188014703795610),
    BaseElement::new(2111548358776179736),
    BaseElement::new(7338420082729848069),
    BaseElement::new(11736253547470159946),
    BaseElement::new(11882449274483722406),
    BaseElement::new(13880779032198735515),
    BaseElement::new(12012886003476663648),
    BaseElement::new(1177368),
    BaseElement::new(1095368),
    BaseElement::new(1264278),
    BaseElement::new(1101695),
    BaseElement::new(1199363),
    BaseElement::new(1308833),
    BaseElement::new(1145944),
    BaseElement::new(1256596),
    BaseElement::new(1265600),
    BaseElement::new(1089681),
    BaseElement::new(1214817),
    BaseElement::new(25),
    BaseElement::new(9561079619973624339),
    BaseElement::new(3427032003991111411),
    BaseElement::new(16026109245305520857),
    BaseElement::new(842178779993054962),
    BaseElement::new(6620069080479782436),
    BaseElement::new(520632651104976912),
    BaseElement::new(5977708219320356796),
    BaseElement::new(14677035874152442976),
    BaseElement::new(12438555763140714832),
    BaseElement::new(10308634069667372976),
    BaseElement::new(1889137300031443018),
    BaseElement::new(4864),
    BaseElement::new(5968),
    BaseElement::new(4430),
    BaseElement::new(4895),
    BaseElement::new(5755),
    BaseElement::new(4977),
    BaseElement::new(4656),
    BaseElement::new(6188),
    BaseElement::new(4968),
    BaseElement::new(3889),
    BaseElement::new(5577),
    BaseElement::new(25),
    BaseElement::new(4233023069765094533),
    BaseElement::new(11320301090717319475),
    BaseElement::new(529847152638273925),
    BaseElement::new(11362416581384070759),
    BaseElement::new(3913471784331119128),
    BaseElement::new(5817936720856651185),
    BaseElement::new(17448019282603275260),
    BaseElement::new(3425091249974323865),
    BaseElement::new(13157846471433414730),
    BaseElement::new(673370378535461536),
    BaseElement::new(846766219905577371),
    BaseElement::new(20),
    BaseElement::new(34),
    BaseElement::new(18),
    BaseElement::new(39),
    BaseElement::new(13),
    BaseElement::new(13),
    BaseElement::new(28),
    BaseElement::new(2),
    BaseElement::new(16),
    BaseElement::new(41),
    BaseElement::new(15),
];
