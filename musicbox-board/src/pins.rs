#![allow(dead_code)]

use embassy_stm32::peripherals::*;

//////////////
//  Piezo   //
//////////////

pub type BuzzerTimer = TIM3;
pub type BuzzerPin = PA6; // TIM3_CH1

///////////////
//  Buttons  //
///////////////

pub type PlayPauseBtnPin = PA0; // idle-low, pressed-high
pub type NextSongBtnPin = PC13; // pull-up, pressed-low

///////////////////
//  Volume knob  //
///////////////////

pub type VolumeAdc = ADC1;
pub type VolumePotPin = PC4; // ADC1_IN14

////////////
//  LEDs  //
////////////

pub type SongLed0Pin = PF6;
pub type SongLed1Pin = PF7;
pub type PlayingLedPin = PF8;
pub type PausedLedPin = PF9;

////////////////////
//  Status panel  //
////////////////////

pub type PanelUart = USART1;
pub type PanelTxPin = PA9;
